//! Java definition.

use glint_theme::Category;
use regex::Regex;

use crate::language::{
    DeclarationForm, FunctionForm, LanguageDefinition, Matcher, Pass, keyword_matcher,
};
use crate::placeholder::MARKER_PATTERN;

const KEYWORDS: &[&str] = &[
    "public", "private", "protected", "class", "interface", "extends", "implements",
    "static", "final", "void", "return", "new", "try", "catch", "finally", "throw",
    "throws", "import", "package", "this", "super", "synchronized", "volatile",
];

/// Statement heads that share the `name (...) {` shape with a method head.
const STATEMENT_HEADS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "do", "else", "try", "finally", "return",
    "new", "synchronized", "throw", "assert",
];

const KEYWORD_BINDINGS: &[(&str, Category)] = &[
    ("class", Category::Function),
    ("interface", Category::Function),
    // frozen by the builtins pass, resolved the same way as keywords
    ("String", Category::Variable),
    ("Integer", Category::Variable),
    ("Double", Category::Variable),
    ("Boolean", Category::Variable),
];

const PRIMITIVE_BINDINGS: &[(&str, Category)] = &[
    ("int", Category::Variable),
    ("long", Category::Variable),
    ("short", Category::Variable),
    ("byte", Category::Variable),
    ("float", Category::Variable),
    ("double", Category::Variable),
    ("boolean", Category::Variable),
    ("char", Category::Variable),
    ("var", Category::Variable),
];

pub(crate) fn definition() -> Result<LanguageDefinition, regex::Error> {
    Ok(LanguageDefinition {
        id: "java",
        prefix: "java",
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
            // string and char literals fail open to end-of-line only
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
        builtins: vec![
            Matcher::new(r"@[A-Za-z_][A-Za-z0-9_]*", Category::Builtin)?,
            Matcher::new(
                r"\b(?:System|String|Math|List|Map|Set|Integer|Double|Boolean)\b",
                Category::Builtin,
            )?,
        ],
        numbers: vec![Matcher::new(
            r"\b(?:0[xX][0-9A-Fa-f]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?[fFdDlL]?)\b",
            Category::Number,
        )?],
        keywords: KEYWORDS,
        keyword_matcher: Some(keyword_matcher(KEYWORDS)?),
        function_forms: vec![FunctionForm::new(
            r"\b([A-Za-z_$][A-Za-z0-9_$]*)\s*\(([^)]*)\)\s*\{",
            Some(1),
            Some(2),
        )?],
        skip_function_names: STATEMENT_HEADS,
        // the name is the last identifier of a segment (`int count`)
        param_name: Some(Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*$")?),
        declaration_forms: vec![
            DeclarationForm::new(
                &format!(r"({MARKER_PATTERN})\s+([A-Za-z_$][A-Za-z0-9_$]*)"),
                1,
                2,
                true,
                KEYWORD_BINDINGS,
            )?,
            // primitive types are not reserved words, so they are still raw
            DeclarationForm::new(
                r"\b(int|long|short|byte|float|double|boolean|char|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
                1,
                2,
                false,
                PRIMITIVE_BINDINGS,
            )?,
        ],
        identifier: Some(Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*")?),
    })
}
