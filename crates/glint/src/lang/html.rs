//! HTML definition.
//!
//! Classification runs on entity-escaped text, so every pattern spells
//! angle brackets as `&lt;`/`&gt;`. Attribute strings are not extracted
//! separately; a tag is one span, quotes and all.

use glint_theme::Category;

use crate::language::{LanguageDefinition, Matcher, Pass};

pub(crate) fn definition() -> Result<LanguageDefinition, regex::Error> {
    Ok(LanguageDefinition {
        id: "html",
        prefix: "html",
        passes: vec![Pass::Comments, Pass::Builtins],
        strings: vec![],
        comments: vec![
            Matcher::new(r"&lt;!--[\s\S]*?(?:--&gt;|\z)", Category::Comment)?.absorbing(),
        ],
        delimiters: vec![],
        builtins: vec![
            Matcher::new(r"&lt;!(?i:doctype)[^&]*&gt;", Category::Doctype)?,
            // a `&gt;` inside a quoted attribute value does not end the tag
            Matcher::new(
                r#"&lt;/?[A-Za-z](?:"[^"]*"|'[^']*'|&amp;|[^&"'])*?&gt;"#,
                Category::Tag,
            )?,
        ],
        numbers: vec![],
        keywords: &[],
        keyword_matcher: None,
        function_forms: vec![],
        skip_function_names: &[],
        param_name: None,
        declaration_forms: vec![],
        identifier: None,
    })
}
