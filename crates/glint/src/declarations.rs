//! Declared-name tracking for a single render.

use std::collections::HashSet;

use glint_theme::Category;

/// Names declared in the input so far, split by kind.
///
/// Populated by the parameter pass (function names) and the declaration
/// pass; the identifier-usage pass only reads it. A name present in both
/// sets renders as a function everywhere.
#[derive(Debug, Default)]
pub(crate) struct DeclarationSet {
    variables: HashSet<String>,
    functions: HashSet<String>,
}

impl DeclarationSet {
    pub fn record_variable(&mut self, name: &str) {
        if !self.functions.contains(name) {
            self.variables.insert(name.to_owned());
        }
    }

    pub fn record_function(&mut self, name: &str) {
        self.variables.remove(name);
        self.functions.insert(name.to_owned());
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// The category a bare identifier should render with, if declared.
    pub fn lookup(&self, name: &str) -> Option<Category> {
        if self.functions.contains(name) {
            Some(Category::Function)
        } else if self.variables.contains(name) {
            Some(Category::Variable)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_win_over_variables() {
        let mut decls = DeclarationSet::default();
        decls.record_variable("f");
        decls.record_function("f");
        assert_eq!(decls.lookup("f"), Some(Category::Function));

        // and the other way round, a function stays a function
        decls.record_variable("f");
        assert_eq!(decls.lookup("f"), Some(Category::Function));
    }

    #[test]
    fn undeclared_names_resolve_to_nothing() {
        let decls = DeclarationSet::default();
        assert_eq!(decls.lookup("ghost"), None);
    }
}
