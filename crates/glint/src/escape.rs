//! Entity escaping for untrusted snippet input.
//!
//! Escaping runs exactly once per render, before any classification, so
//! every matcher in the pipeline is written against the escaped form
//! (`<` is `&lt;`, `&` is `&amp;`). The escaper also strips the control
//! characters reserved for placeholder markers, which is what makes the
//! marker alphabet collision-free for arbitrary input.

use crate::placeholder::{MARKER_END, MARKER_ONE, MARKER_START, MARKER_ZERO};

/// Escape text for use inside an HTML element body.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            MARKER_START | MARKER_END | MARKER_ZERO | MARKER_ONE => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted HTML attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            MARKER_START | MARKER_END | MARKER_ZERO | MARKER_ONE => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn ampersand_escapes_before_entities() {
        // Escaping must not double-escape its own output structure.
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn identity_on_plain_text() {
        assert_eq!(escape("const x = 10;"), "const x = 10;");
    }

    #[test]
    fn strips_marker_control_characters() {
        assert_eq!(escape("a\u{1}\u{3}\u{4}\u{2}b"), "ab");
    }

    #[test]
    fn attribute_escaping_covers_quotes() {
        assert_eq!(escape_attr(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#39;bye&#39;");
    }
}
