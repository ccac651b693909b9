//! Theme support for glint snippet highlighting.
//!
//! This crate provides:
//! - Category definitions (the canonical list of syntax categories)
//! - The CSS class naming rule shared by the engine and the themes
//! - Theme parsing from TOML files (behind the `toml` feature)
//! - CSS output generation
//! - Built-in themes (midnight, daylight)

pub mod category;
pub mod theme;

pub use category::{CATEGORIES, COUNT, Category, css_class};
pub use theme::{Color, Style, Theme, ThemeError, builtin};
