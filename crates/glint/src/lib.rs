//! Snippet syntax highlighting by placeholder substitution.
//!
//! The engine escapes the input once, then runs a fixed sequence of
//! classification passes over the escaped text. Each pass replaces the
//! spans it claims with collision-free control-character markers, so a
//! keyword inside a string can never be re-classified: by the time the
//! keyword pass runs, the string is an opaque marker. A final restore
//! pass replays the recorded spans, newest first, as
//! `<span class="{prefix}-{category}">` markup.
//!
//! Five languages ship built in (`javascript`, `python`, `java`, `html`,
//! `css`); unknown languages render escaped but unhighlighted.
//!
//! ```
//! let highlighter = glint::Highlighter::new()?;
//! let html = highlighter.highlight("const x = 10;", "javascript")?;
//! assert!(html.contains(r#"<span class="js-keyword">const</span>"#));
//! # Ok::<(), glint::Error>(())
//! ```
//!
//! [`build_snippet`] wraps a highlight in the embeddable snippet chrome
//! (theme class, caption, copy button, optional line numbers); the
//! matching stylesheets live in the `glint-theme` crate, re-exported here
//! as [`theme`].

mod declarations;
mod escape;
mod highlighter;
mod lang;
mod language;
mod lines;
mod pipeline;
mod placeholder;
mod restore;
mod snippet;

pub use glint_theme as theme;

pub use escape::{escape, escape_attr};
pub use highlighter::{HighlightReport, Highlighter};
pub use language::{LanguageDefinition, Pass, Registry, detect_language, normalize_language};
pub use lines::number_lines;
pub use snippet::{SnippetOptions, build_snippet};

/// Errors the engine can produce.
///
/// Expected-input conditions never error: unknown languages pass through,
/// unterminated literals fail open, marker residue is reported in the
/// [`HighlightReport`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
