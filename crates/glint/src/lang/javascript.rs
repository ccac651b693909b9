//! JavaScript definition.

use glint_theme::Category;
use regex::Regex;

use crate::language::{
    DeclarationForm, FunctionForm, LanguageDefinition, Matcher, Pass, keyword_matcher,
};
use crate::placeholder::MARKER_PATTERN;

const KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while", "break",
    "continue", "try", "catch", "class", "new", "this", "import", "export", "await", "async",
];

const BINDINGS: &[(&str, Category)] = &[
    ("const", Category::Variable),
    ("let", Category::Variable),
    ("var", Category::Variable),
    ("function", Category::Function),
    ("class", Category::Function),
];

pub(crate) fn definition() -> Result<LanguageDefinition, regex::Error> {
    Ok(LanguageDefinition {
        id: "javascript",
        prefix: "js",
        passes: vec![
            Pass::Strings,
            Pass::Comments,
            Pass::Parameters,
            Pass::Delimiters,
            Pass::Builtins,
            Pass::Numbers,
            Pass::Keywords,
            Pass::Declarations,
            Pass::IdentifierUsage,
        ],
        strings: vec![
            // only template literals may cross a line; quote forms fail
            // open to end-of-line, never further
            Matcher::new(r"`(?:[^`\\]|\\[\s\S])*?(?:`|\z)", Category::String)?.absorbing(),
            Matcher::new(r#"(?m)"(?:[^"\\\n]|\\[^\n])*?(?:"|$)"#, Category::String)?.absorbing(),
            Matcher::new(r"(?m)'(?:[^'\\\n]|\\[^\n])*?(?:'|$)", Category::String)?.absorbing(),
        ],
        comments: vec![
            Matcher::new(r"//[^\n]*", Category::Comment)?.absorbing(),
            Matcher::new(r"/\*[\s\S]*?(?:\*/|\z)", Category::Comment)?.absorbing(),
        ],
        delimiters: vec![Matcher::new(
            r"&lt;|&gt;|&amp;|[(){}\[\];,=+*/%!?:|^~-]",
            Category::Delimiter,
        )?],
        builtins: vec![Matcher::new(
            r"\b(?:console|alert|fetch|setTimeout|setInterval|log)\b",
            Category::Builtin,
        )?],
        numbers: vec![Matcher::new(
            r"\b(?:0[xX][0-9A-Fa-f]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
            Category::Number,
        )?],
        keywords: KEYWORDS,
        keyword_matcher: Some(keyword_matcher(KEYWORDS)?),
        function_forms: vec![
            FunctionForm::new(
                r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(([^)]*)\)",
                Some(1),
                Some(2),
            )?,
            // const add = (a, b) => ...
            FunctionForm::new(
                r"\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s*)?\(([^)]*)\)\s*=&gt;",
                Some(1),
                Some(2),
            )?,
            // const double = n => ...
            FunctionForm::new(
                r"\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=&gt;",
                Some(1),
                Some(2),
            )?,
        ],
        skip_function_names: &[],
        param_name: Some(Regex::new(r"^[\s*.]*([A-Za-z_$][A-Za-z0-9_$]*)")?),
        declaration_forms: vec![DeclarationForm::new(
            &format!(r"({MARKER_PATTERN})\s+([A-Za-z_$][A-Za-z0-9_$]*)"),
            1,
            2,
            true,
            BINDINGS,
        )?],
        identifier: Some(Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*")?),
    })
}
