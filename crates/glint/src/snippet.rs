//! Snippet assembly.
//!
//! Produces the full embeddable snippet: a `<pre>` carrying the theme
//! class, an optional caption, an optional copy button holding the raw
//! source in `data-code`, and the `<code>` element with the highlighted
//! body. Output is a plain string; wiring the copy button to a clipboard
//! is the host page's job.

use crate::Error;
use crate::escape::{escape, escape_attr};
use crate::highlighter::Highlighter;
use crate::lines::number_lines;

/// Presentation options for one snippet.
#[derive(Debug, Clone)]
pub struct SnippetOptions {
    /// Language id or alias; unknown ids render escaped but unhighlighted.
    pub language: String,
    /// When off, the body is escaped only.
    pub highlight: bool,
    /// Theme class added to the `<pre>` element.
    pub theme: Option<String>,
    pub caption: Option<String>,
    pub no_copy: bool,
    pub copy_button_text: Option<String>,
    pub copy_button_style: Option<String>,
    pub show_line_numbers: bool,
    /// Forwarded as `data-fallback` on the copy button for the host's
    /// clipboard-failure path.
    pub error_message: Option<String>,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            language: "javascript".to_owned(),
            highlight: true,
            theme: None,
            caption: None,
            no_copy: false,
            copy_button_text: None,
            copy_button_style: None,
            show_line_numbers: false,
            error_message: None,
        }
    }
}

/// Build the snippet markup for `code`.
pub fn build_snippet(
    highlighter: &Highlighter,
    code: &str,
    options: &SnippetOptions,
) -> Result<String, Error> {
    let mut body = if options.highlight {
        highlighter.highlight(code, &options.language)?
    } else {
        escape(code)
    };
    if options.show_line_numbers {
        body = number_lines(&body);
    }

    let mut out = String::with_capacity(body.len() + 256);
    out.push_str("<pre class=\"glint");
    if let Some(theme) = &options.theme {
        out.push(' ');
        out.push_str(&escape_attr(theme));
    }
    out.push_str("\">");

    if let Some(caption) = &options.caption {
        out.push_str("<p class=\"snippet-caption\">");
        out.push_str(&escape(caption));
        out.push_str("</p>");
    }

    if !options.no_copy {
        out.push_str("<button class=\"copy-btn\" data-code=\"");
        out.push_str(&escape_attr(code));
        out.push('"');
        if let Some(style) = &options.copy_button_style {
            out.push_str(" style=\"");
            out.push_str(&escape_attr(style));
            out.push('"');
        }
        if let Some(fallback) = &options.error_message {
            out.push_str(" data-fallback=\"");
            out.push_str(&escape_attr(fallback));
            out.push('"');
        }
        out.push('>');
        out.push_str(options.copy_button_text.as_deref().unwrap_or("\u{1f4cb}"));
        out.push_str("</button>");
    }

    out.push_str("<code class=\"language-");
    out.push_str(&escape_attr(&options.language));
    out.push_str("\">");
    out.push_str(&body);
    out.push_str("</code></pre>");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> Highlighter {
        Highlighter::new().unwrap()
    }

    #[test]
    fn default_snippet_has_copy_button_with_raw_code() {
        let out = build_snippet(&highlighter(), "const x = \"a\";", &SnippetOptions::default())
            .unwrap();
        assert!(out.starts_with("<pre class=\"glint\">"));
        assert!(out.contains("data-code=\"const x = &quot;a&quot;;\""));
        assert!(out.contains("<code class=\"language-javascript\">"));
        assert!(out.contains("\u{1f4cb}"));
    }

    #[test]
    fn no_copy_removes_the_button() {
        let options = SnippetOptions {
            no_copy: true,
            ..SnippetOptions::default()
        };
        let out = build_snippet(&highlighter(), "x", &options).unwrap();
        assert!(!out.contains("<button"));
    }

    #[test]
    fn caption_and_theme_are_rendered() {
        let options = SnippetOptions {
            theme: Some("midnight".to_owned()),
            caption: Some("Listing 1 <demo>".to_owned()),
            ..SnippetOptions::default()
        };
        let out = build_snippet(&highlighter(), "x", &options).unwrap();
        assert!(out.starts_with("<pre class=\"glint midnight\">"));
        assert!(out.contains("<p class=\"snippet-caption\">Listing 1 &lt;demo&gt;</p>"));
    }

    #[test]
    fn highlight_off_escapes_only() {
        let options = SnippetOptions {
            highlight: false,
            ..SnippetOptions::default()
        };
        let out = build_snippet(&highlighter(), "const x < 1;", &options).unwrap();
        assert!(out.contains("const x &lt; 1;"));
        assert!(!out.contains("js-keyword"));
    }

    #[test]
    fn custom_button_text_style_and_fallback() {
        let options = SnippetOptions {
            copy_button_text: Some("Copy".to_owned()),
            copy_button_style: Some("float: right".to_owned()),
            error_message: Some("copy failed".to_owned()),
            ..SnippetOptions::default()
        };
        let out = build_snippet(&highlighter(), "x", &options).unwrap();
        assert!(out.contains(">Copy</button>"));
        assert!(out.contains(" style=\"float: right\""));
        assert!(out.contains(" data-fallback=\"copy failed\""));
    }

    #[test]
    fn line_numbers_wrap_the_body() {
        let options = SnippetOptions {
            show_line_numbers: true,
            ..SnippetOptions::default()
        };
        let out = build_snippet(&highlighter(), "let a = 1;\nlet b = 2;", &options).unwrap();
        assert!(out.contains("<span class=\"line-number\">2</span>"));
    }
}
