//! CSS definition.
//!
//! No delimiter pass: braces, colons and parentheses stay raw so the
//! selector, property and function matchers can anchor on them.

use glint_theme::Category;

use crate::language::{LanguageDefinition, Matcher, Pass};

pub(crate) fn definition() -> Result<LanguageDefinition, regex::Error> {
    Ok(LanguageDefinition {
        id: "css",
        prefix: "css",
        passes: vec![Pass::Strings, Pass::Comments, Pass::Builtins, Pass::Numbers],
        strings: vec![
            Matcher::new(r#"(?m)"(?:[^"\\\n]|\\[^\n])*?(?:"|$)"#, Category::String)?.absorbing(),
            Matcher::new(r"(?m)'(?:[^'\\\n]|\\[^\n])*?(?:'|$)", Category::String)?.absorbing(),
        ],
        comments: vec![
            Matcher::new(r"/\*[\s\S]*?(?:\*/|\z)", Category::Comment)?.absorbing(),
        ],
        delimiters: vec![],
        builtins: vec![
            // everything before an opening brace on the same line
            Matcher::new(r"([^{}\n]+)\{", Category::Selector)?
                .group(1)
                .absorbing(),
            Matcher::new(r"([A-Za-z-][A-Za-z0-9-]*)[ \t]*:", Category::Property)?.group(1),
            Matcher::new(r"([A-Za-z-][A-Za-z0-9-]*)\(", Category::Builtin)?.group(1),
        ],
        numbers: vec![
            Matcher::new(r"#[0-9A-Fa-f]{3,8}\b", Category::Number)?,
            Matcher::new(r"\b\d+(?:\.\d+)?[a-zA-Z%]*", Category::Number)?,
        ],
        keywords: &[],
        keyword_matcher: None,
        function_forms: vec![],
        skip_function_names: &[],
        param_name: None,
        declaration_forms: vec![],
        identifier: None,
    })
}
