//! The public highlighting facade.

use tracing::debug;

use crate::Error;
use crate::declarations::DeclarationSet;
use crate::escape::escape;
use crate::language::Registry;
use crate::placeholder::PlaceholderStore;
use crate::{pipeline, restore};

/// Highlights code into class-annotated span markup.
///
/// Construction compiles every built-in language definition once; the
/// instance is then reusable (and shareable) across renders.
#[derive(Debug)]
pub struct Highlighter {
    registry: Registry,
}

/// What a render did, for callers that want to check the engine's
/// invariants held.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightReport {
    /// Classified spans in the output.
    pub tokens: usize,
    /// Markers left unrestored. Always zero unless there is a pipeline bug;
    /// production renders log and report instead of panicking.
    pub residue: usize,
}

impl Highlighter {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            registry: Registry::builtin()?,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Escape and highlight `code`. Unknown languages come back escaped
    /// but otherwise untouched.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String, Error> {
        Ok(self.highlight_with_report(code, language)?.0)
    }

    pub fn highlight_with_report(
        &self,
        code: &str,
        language: &str,
    ) -> Result<(String, HighlightReport), Error> {
        let escaped = escape(code);
        let Some(def) = self.registry.get(language) else {
            debug!(language, "no definition, passing escaped text through");
            return Ok((escaped, HighlightReport::default()));
        };
        let mut store = PlaceholderStore::new();
        let mut decls = DeclarationSet::default();
        let frozen = pipeline::run(def, &escaped, &mut store, &mut decls)?;
        let tokens = store.len();
        let outcome = restore::restore(frozen, &store, def.prefix);
        Ok((
            outcome.html,
            HighlightReport {
                tokens,
                residue: outcome.residue,
            },
        ))
    }
}
