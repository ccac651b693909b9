//! Category definitions - single source of truth.
//!
//! A category is the semantic class the classifier assigns to a span of
//! text. Themes style categories; the renderer names them in CSS classes.
//!
//! The rendered class for a span is `{prefix}-{category}` where the prefix
//! comes from the active language definition (`js`, `py`, `html`, ...), so
//! stylesheets can target one language (`.js-keyword`) or every language
//! (`[class$="-keyword"]`).

/// The semantic classes a span of source text can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved word from the language's keyword table.
    Keyword,
    /// String literal, including its quotes.
    String,
    /// Line or block comment, including its markers.
    Comment,
    /// Numeric literal.
    Number,
    /// Punctuation and operator characters.
    Delimiter,
    /// Identifier recorded as a variable declaration.
    Variable,
    /// Identifier recorded as a function name.
    Function,
    /// Function parameter name.
    Parameter,
    /// Language built-in (global objects, well-known functions, annotations).
    Builtin,
    /// Markup tag, e.g. `<h1>` or `</h1>`.
    Tag,
    /// Markup document type declaration.
    Doctype,
    /// Stylesheet property name.
    Property,
    /// Stylesheet selector.
    Selector,
}

impl Category {
    /// The canonical lowercase name, used as the CSS class suffix.
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Number => "number",
            Category::Delimiter => "delimiter",
            Category::Variable => "variable",
            Category::Function => "function",
            Category::Parameter => "parameter",
            Category::Builtin => "builtin",
            Category::Tag => "tag",
            Category::Doctype => "doctype",
            Category::Property => "property",
            Category::Selector => "selector",
        }
    }

    /// Look a category up by its canonical name.
    pub fn from_name(name: &str) -> Option<Category> {
        CATEGORIES.iter().copied().find(|c| c.name() == name)
    }

    /// Whether spans of this category may legally contain newlines.
    ///
    /// The line-number post-processor relies on this being the only set of
    /// categories whose spans it may have to split across line boundaries.
    pub fn multiline(self) -> bool {
        matches!(self, Category::Comment | Category::String)
    }
}

/// All categories, in a fixed order. The index in this array is the
/// category index used by [`crate::Theme`] style storage.
pub const CATEGORIES: &[Category] = &[
    Category::Keyword,
    Category::String,
    Category::Comment,
    Category::Number,
    Category::Delimiter,
    Category::Variable,
    Category::Function,
    Category::Parameter,
    Category::Builtin,
    Category::Tag,
    Category::Doctype,
    Category::Property,
    Category::Selector,
];

/// Total number of categories.
pub const COUNT: usize = CATEGORIES.len();

/// Index of a category into [`CATEGORIES`]. The array lists variants in
/// declaration order, so the discriminant is the index.
pub(crate) fn index(category: Category) -> usize {
    category as usize
}

/// The CSS class for a span: `{prefix}-{category}`.
pub fn css_class(prefix: &str, category: Category) -> String {
    format!("{prefix}-{}", category.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cat in CATEGORIES {
            assert_eq!(Category::from_name(cat.name()), Some(*cat));
        }
    }

    #[test]
    fn array_order_matches_discriminants() {
        for (i, cat) in CATEGORIES.iter().enumerate() {
            assert_eq!(index(*cat), i);
        }
    }

    #[test]
    fn class_naming() {
        assert_eq!(css_class("js", Category::Keyword), "js-keyword");
        assert_eq!(css_class("html", Category::Doctype), "html-doctype");
    }

    #[test]
    fn only_literals_are_multiline() {
        let multiline: Vec<_> = CATEGORIES.iter().filter(|c| c.multiline()).collect();
        assert_eq!(multiline, [&Category::String, &Category::Comment]);
    }
}
