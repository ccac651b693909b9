//! Python definition.

use glint_theme::Category;
use regex::Regex;

use crate::language::{
    DeclarationForm, FunctionForm, LanguageDefinition, Matcher, Pass, keyword_matcher,
};
use crate::placeholder::MARKER_PATTERN;

const KEYWORDS: &[&str] = &[
    "def", "return", "if", "else", "elif", "for", "while", "break", "continue", "try",
    "except", "class", "import", "from", "as", "with", "lambda", "yield", "async", "await",
    "pass", "global", "nonlocal", "raise",
];

/// Binders that are keyword markers by the time the declaration pass runs.
const KEYWORD_BINDINGS: &[(&str, Category)] = &[
    ("for", Category::Variable),
    ("as", Category::Variable),
    ("global", Category::Variable),
    ("nonlocal", Category::Variable),
    ("class", Category::Function),
];

/// The binder of the assignment form is the frozen `=` delimiter.
const ASSIGNMENT_BINDINGS: &[(&str, Category)] = &[("=", Category::Variable)];

pub(crate) fn definition() -> Result<LanguageDefinition, regex::Error> {
    Ok(LanguageDefinition {
        id: "python",
        prefix: "py",
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
            Matcher::new(r#""""[\s\S]*?(?:"""|\z)"#, Category::String)?.absorbing(),
            Matcher::new(r"'''[\s\S]*?(?:'''|\z)", Category::String)?.absorbing(),
            // single-quote forms fail open to end-of-line only
            Matcher::new(r#"(?m)"(?:[^"\\\n]|\\[^\n])*?(?:"|$)"#, Category::String)?.absorbing(),
            Matcher::new(r"(?m)'(?:[^'\\\n]|\\[^\n])*?(?:'|$)", Category::String)?.absorbing(),
        ],
        comments: vec![Matcher::new(r"#[^\n]*", Category::Comment)?.absorbing()],
        delimiters: vec![Matcher::new(
            r"&lt;|&gt;|&amp;|[(){}\[\];:,=+*/%@!|^~-]",
            Category::Delimiter,
        )?],
        builtins: vec![Matcher::new(
            r"\b(?:print|len|range|input|open|str|int|float|list|dict|set|tuple|type|isinstance|enumerate|zip|map|filter|sum|min|max|abs|sorted)\b",
            Category::Builtin,
        )?],
        numbers: vec![Matcher::new(
            r"\b(?:0[xXbBoO][0-9A-Fa-f_]+|\d[\d_]*(?:\.[\d_]+)?(?:[eE][+-]?\d+)?)\b",
            Category::Number,
        )?],
        keywords: KEYWORDS,
        keyword_matcher: Some(keyword_matcher(KEYWORDS)?),
        function_forms: vec![FunctionForm::new(
            r"\bdef\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)",
            Some(1),
            Some(2),
        )?],
        skip_function_names: &[],
        param_name: Some(Regex::new(r"^[\s*]*([A-Za-z_][A-Za-z0-9_]*)")?),
        declaration_forms: vec![
            DeclarationForm::new(
                &format!(r"({MARKER_PATTERN})\s+([A-Za-z_][A-Za-z0-9_]*)"),
                1,
                2,
                true,
                KEYWORD_BINDINGS,
            )?,
            // `total = ...` at statement start; the `=` is a marker by now.
            DeclarationForm::new(
                &format!(r"(?m)^[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*({MARKER_PATTERN})"),
                2,
                1,
                true,
                ASSIGNMENT_BINDINGS,
            )?,
        ],
        identifier: Some(Regex::new(r"[A-Za-z_][A-Za-z0-9_]*")?),
    })
}
