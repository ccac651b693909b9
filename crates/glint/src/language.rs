//! Language definitions and the registry that resolves them.
//!
//! A [`LanguageDefinition`] is data: an ordered pass list plus the
//! matchers, keyword table, function head forms and declaration forms each
//! pass consumes. The pipeline interprets that data; adding a language
//! means adding a module under `lang/` and listing it in
//! [`Registry::builtin`].
//!
//! All patterns are written against *escaped* text (so `<` is `&lt;`)
//! and use the `regex` crate, which has no lookaround or backreferences;
//! string and comment matchers therefore use lazy repetition with a
//! fail-open alternative instead of failing to match when unterminated:
//! single-line forms stop at end-of-line, forms that may legally cross
//! lines (block comments, template literals, triple-quoted strings) run
//! to end-of-input.

use std::path::Path;

use glint_theme::Category;
use regex::Regex;

use crate::lang;

/// One classification pass. The per-language `passes` list holds a subset
/// of these, always in this relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// String literals.
    Strings,
    /// Line and block comments.
    Comments,
    /// Function-head detection: records function names and freezes every
    /// occurrence of the head's parameter names.
    Parameters,
    /// Punctuation and operators.
    Delimiters,
    /// Domain-specific matchers: well-known globals, annotations, markup
    /// tags, stylesheet selectors and properties.
    Builtins,
    /// Numeric literals.
    Numbers,
    /// Reserved words from the keyword table.
    Keywords,
    /// Declaration forms; records declared names.
    Declarations,
    /// Remaining occurrences of declared names.
    IdentifierUsage,
}

/// A compiled pattern bound to the category it classifies.
#[derive(Debug)]
pub(crate) struct Matcher {
    pub regex: Regex,
    pub category: Category,
    /// Freeze only this capture group instead of the whole match.
    pub group: Option<usize>,
    /// Expand markers covered by the match back into its text.
    pub absorb: bool,
}

impl Matcher {
    pub fn new(pattern: &str, category: Category) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            category,
            group: None,
            absorb: false,
        })
    }

    pub fn group(mut self, group: usize) -> Self {
        self.group = Some(group);
        self
    }

    pub fn absorbing(mut self) -> Self {
        self.absorb = true;
        self
    }
}

/// A function-head form: where the name and the parameter list live.
#[derive(Debug)]
pub(crate) struct FunctionForm {
    pub regex: Regex,
    pub name_group: Option<usize>,
    pub params_group: Option<usize>,
}

impl FunctionForm {
    pub fn new(
        pattern: &str,
        name_group: Option<usize>,
        params_group: Option<usize>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            name_group,
            params_group,
        })
    }
}

/// A declaration form: a binder (keyword marker or raw word) next to the
/// declared identifier. The binder text is checked against the form's
/// `bindings` table, which also supplies the category the identifier is
/// recorded with.
#[derive(Debug)]
pub(crate) struct DeclarationForm {
    pub regex: Regex,
    pub binder_group: usize,
    pub name_group: usize,
    /// The binder group matches a marker that must be resolved through the
    /// placeholder store (binders that are keywords are frozen by the time
    /// this pass runs).
    pub binder_is_marker: bool,
    pub bindings: &'static [(&'static str, Category)],
}

impl DeclarationForm {
    pub fn new(
        pattern: &str,
        binder_group: usize,
        name_group: usize,
        binder_is_marker: bool,
        bindings: &'static [(&'static str, Category)],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            binder_group,
            name_group,
            binder_is_marker,
            bindings,
        })
    }
}

/// Everything the pipeline needs to highlight one language.
#[derive(Debug)]
pub struct LanguageDefinition {
    pub id: &'static str,
    /// CSS class prefix: the rendered class is `{prefix}-{category}`.
    pub prefix: &'static str,
    /// The passes to run, in order.
    pub passes: Vec<Pass>,
    pub(crate) strings: Vec<Matcher>,
    pub(crate) comments: Vec<Matcher>,
    pub(crate) delimiters: Vec<Matcher>,
    pub(crate) builtins: Vec<Matcher>,
    pub(crate) numbers: Vec<Matcher>,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) keyword_matcher: Option<Matcher>,
    pub(crate) function_forms: Vec<FunctionForm>,
    /// Names a function-head form must never treat as a function name
    /// (statement heads that share the call shape, e.g. `if (...) {`).
    pub(crate) skip_function_names: &'static [&'static str],
    /// Applied to each comma-separated parameter segment; group 1 is the
    /// parameter name.
    pub(crate) param_name: Option<Regex>,
    pub(crate) declaration_forms: Vec<DeclarationForm>,
    pub(crate) identifier: Option<Regex>,
}

/// Compile a word-boundary-anchored keyword alternation.
pub(crate) fn keyword_matcher(keywords: &[&str]) -> Result<Matcher, regex::Error> {
    Matcher::new(
        &format!(r"\b(?:{})\b", keywords.join("|")),
        Category::Keyword,
    )
}

/// The built-in language definitions.
#[derive(Debug)]
pub struct Registry {
    definitions: Vec<LanguageDefinition>,
}

impl Registry {
    pub fn builtin() -> Result<Self, regex::Error> {
        Ok(Self {
            definitions: vec![
                lang::javascript::definition()?,
                lang::python::definition()?,
                lang::java::definition()?,
                lang::html::definition()?,
                lang::css::definition()?,
            ],
        })
    }

    /// Resolve a language id or alias. Unknown ids yield `None`, which the
    /// highlighter renders as escaped pass-through (zero passes).
    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        let lower = id.to_ascii_lowercase();
        let id = normalize_language(&lower);
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|d| d.id)
    }
}

/// Map a language alias to its canonical id; unknown ids pass through.
pub fn normalize_language(id: &str) -> &str {
    match id {
        "js" | "jsx" | "mjs" | "cjs" | "node" | "javascript" => "javascript",
        "py" | "python3" | "python" => "python",
        "java" => "java",
        "htm" | "xhtml" | "html" => "html",
        "css" => "css",
        other => other,
    }
}

/// Guess a language id from a file extension.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
        "py" => Some("python"),
        "java" => Some("java"),
        "html" | "htm" => Some("html"),
        "css" => Some("css"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize() {
        assert_eq!(normalize_language("js"), "javascript");
        assert_eq!(normalize_language("py"), "python");
        assert_eq!(normalize_language("htm"), "html");
        assert_eq!(normalize_language("cobol"), "cobol");
    }

    #[test]
    fn registry_resolves_aliases_case_insensitively() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.get("JS").map(|d| d.id), Some("javascript"));
        assert_eq!(registry.get("Python3").map(|d| d.id), Some("python"));
        assert!(registry.get("fortran").is_none());
    }

    #[test]
    fn extension_detection() {
        assert_eq!(detect_language(Path::new("app.mjs")), Some("javascript"));
        assert_eq!(detect_language(Path::new("style.css")), Some("css"));
        assert_eq!(detect_language(Path::new("README")), None);
    }

    #[test]
    fn passes_stay_in_canonical_order() {
        let canonical = [
            Pass::Strings,
            Pass::Comments,
            Pass::Parameters,
            Pass::Delimiters,
            Pass::Builtins,
            Pass::Numbers,
            Pass::Keywords,
            Pass::Declarations,
            Pass::IdentifierUsage,
        ];
        let registry = Registry::builtin().unwrap();
        for id in ["javascript", "python", "java", "html", "css"] {
            let def = registry.get(id).unwrap();
            let positions: Vec<_> = def
                .passes
                .iter()
                .map(|p| canonical.iter().position(|c| c == p).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "{id} passes out of order");
        }
    }
}
