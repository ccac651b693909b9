//! Theme model and CSS generation.
//!
//! A theme assigns a [`Style`] to each [`Category`] plus optional base
//! foreground/background colors. Themes are purely presentational: the
//! engine emits class-based spans and a theme class on the container, and
//! the generated CSS connects the two.

use std::fmt::Write;

use crate::category::{self, CATEGORIES, COUNT, Category};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bad = || ThemeError::BadColor(hex.to_string());
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| bad())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| bad())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| bad())?;
                Ok(Self { r, g, b })
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| bad())
                };
                Ok(Self {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            _ => Err(bad()),
        }
    }

    /// Format as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The style for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && !self.bold && !self.italic
    }
}

/// Errors from theme parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid color: {0}")]
    BadColor(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[cfg(feature = "toml")]
    #[error("theme parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[cfg(feature = "toml")]
    #[error("invalid value for key {0}")]
    BadValue(String),
}

/// A complete theme: a CSS class name, base colors, and one optional style
/// per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The class placed on the snippet container (e.g. `midnight`).
    pub name: String,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    styles: [Option<Style>; COUNT],
}

impl Theme {
    /// An empty theme with the given container class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreground: None,
            background: None,
            styles: [None; COUNT],
        }
    }

    /// Set the style for a category, builder style.
    pub fn with(mut self, category: Category, style: Style) -> Self {
        self.set(category, style);
        self
    }

    pub fn set(&mut self, category: Category, style: Style) {
        self.styles[category::index(category)] = Some(style);
    }

    /// The style for a category, if the theme defines one.
    pub fn style(&self, category: Category) -> Option<&Style> {
        self.styles[category::index(category)].as_ref()
    }

    /// Generate the stylesheet for this theme.
    ///
    /// Category rules use suffix attribute selectors so they apply to every
    /// language prefix: `.midnight [class$="-keyword"] { color: ...; }`.
    pub fn css(&self) -> String {
        let mut css = String::new();
        let _ = write!(css, ".{} {{", self.name);
        if let Some(bg) = self.background {
            let _ = write!(css, " background: {};", bg.hex());
        }
        if let Some(fg) = self.foreground {
            let _ = write!(css, " color: {};", fg.hex());
        }
        let _ = writeln!(css, " }}");

        for category in CATEGORIES {
            let Some(style) = self.style(*category) else {
                continue;
            };
            if style.is_empty() {
                continue;
            }
            let _ = write!(css, ".{} [class$=\"-{}\"] {{", self.name, category.name());
            if let Some(color) = style.color {
                let _ = write!(css, " color: {};", color.hex());
            }
            if style.bold {
                let _ = write!(css, " font-weight: bold;");
            }
            if style.italic {
                let _ = write!(css, " font-style: italic;");
            }
            let _ = writeln!(css, " }}");
        }
        css
    }

    /// Parse a TOML theme definition.
    ///
    /// The format follows the Helix convention: top-level keys are category
    /// names mapping to either a color string or a table with `fg` and
    /// `modifiers`; `name`, `foreground` and `background` are reserved keys.
    ///
    /// ```toml
    /// name = "custom"
    /// background = "#1e1e2e"
    /// keyword = { fg = "#cba6f7", modifiers = ["bold"] }
    /// string = "#a6e3a1"
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let table: toml::Table = source.parse()?;
        let name = match table.get("name") {
            Some(toml::Value::String(name)) => name.clone(),
            Some(_) => return Err(ThemeError::BadValue("name".to_string())),
            None => "custom".to_string(),
        };
        let mut theme = Theme::new(name);

        for (key, value) in &table {
            match key.as_str() {
                "name" => {}
                "foreground" => theme.foreground = Some(toml_color(key, value)?),
                "background" => theme.background = Some(toml_color(key, value)?),
                _ => {
                    let category = Category::from_name(key)
                        .ok_or_else(|| ThemeError::UnknownCategory(key.clone()))?;
                    theme.set(category, toml_style(key, value)?);
                }
            }
        }
        Ok(theme)
    }
}

#[cfg(feature = "toml")]
fn toml_color(key: &str, value: &toml::Value) -> Result<Color, ThemeError> {
    match value {
        toml::Value::String(hex) => Color::from_hex(hex),
        _ => Err(ThemeError::BadValue(key.to_string())),
    }
}

#[cfg(feature = "toml")]
fn toml_style(key: &str, value: &toml::Value) -> Result<Style, ThemeError> {
    match value {
        toml::Value::String(hex) => Ok(Style::color(Color::from_hex(hex)?)),
        toml::Value::Table(table) => {
            let mut style = Style::default();
            if let Some(fg) = table.get("fg") {
                style.color = Some(toml_color(key, fg)?);
            }
            if let Some(toml::Value::Array(modifiers)) = table.get("modifiers") {
                for modifier in modifiers {
                    match modifier.as_str() {
                        Some("bold") => style.bold = true,
                        Some("italic") => style.italic = true,
                        _ => return Err(ThemeError::BadValue(key.to_string())),
                    }
                }
            }
            Ok(style)
        }
        _ => Err(ThemeError::BadValue(key.to_string())),
    }
}

/// Built-in themes.
pub mod builtin {
    use super::{Color, Style, Theme};
    use crate::category::Category;

    /// The default dark theme.
    pub fn midnight() -> Theme {
        Theme {
            name: "midnight".to_string(),
            foreground: Some(Color::new(0xd4, 0xd4, 0xd4)),
            background: Some(Color::new(0x1f, 0x24, 0x30)),
            ..Theme::new("")
        }
        .with(Category::Keyword, Style::color(Color::new(0xc5, 0x86, 0xc0)))
        .with(Category::String, Style::color(Color::new(0xa6, 0xe3, 0xa1)))
        .with(Category::Comment, Style::color(Color::new(0x5c, 0x66, 0x90)))
        .with(Category::Number, Style::color(Color::new(0xe6, 0xbd, 0x69)))
        .with(Category::Delimiter, Style::color(Color::new(0x9a, 0xa5, 0xb1)))
        .with(Category::Variable, Style::color(Color::new(0x9c, 0xdc, 0xfe)))
        .with(Category::Function, Style::color(Color::new(0xdc, 0xdc, 0xaa)))
        .with(Category::Parameter, Style::color(Color::new(0xf5, 0xab, 0x6b)))
        .with(Category::Builtin, Style::color(Color::new(0xb9, 0xb9, 0xb9)))
        .with(Category::Tag, Style::color(Color::new(0xf5, 0x75, 0x8d)))
        .with(Category::Doctype, Style::color(Color::new(0xe6, 0xbd, 0x69)))
        .with(Category::Property, Style::color(Color::new(0xe6, 0xbd, 0x69)))
        .with(Category::Selector, Style::color(Color::new(0xf5, 0x75, 0x8d)))
    }

    /// A light theme for printed or pale contexts.
    pub fn daylight() -> Theme {
        Theme {
            name: "daylight".to_string(),
            foreground: Some(Color::new(0x24, 0x29, 0x2f)),
            background: Some(Color::new(0xff, 0xff, 0xff)),
            ..Theme::new("")
        }
        .with(Category::Keyword, Style::color(Color::new(0xcf, 0x22, 0x2e)))
        .with(Category::String, Style::color(Color::new(0x0a, 0x30, 0x69)))
        .with(Category::Comment, Style::color(Color::new(0x6e, 0x77, 0x81)))
        .with(Category::Number, Style::color(Color::new(0x05, 0x50, 0xae)))
        .with(Category::Delimiter, Style::color(Color::new(0x57, 0x60, 0x6a)))
        .with(Category::Variable, Style::color(Color::new(0x95, 0x3d, 0x00)))
        .with(Category::Function, Style::color(Color::new(0x82, 0x50, 0xdf)))
        .with(Category::Parameter, Style::color(Color::new(0xbc, 0x4c, 0x00)))
        .with(Category::Builtin, Style::color(Color::new(0x11, 0x63, 0x29)))
        .with(Category::Tag, Style::color(Color::new(0x11, 0x63, 0x29)))
        .with(Category::Doctype, Style::color(Color::new(0x6e, 0x77, 0x81)))
        .with(Category::Property, Style::color(Color::new(0x05, 0x50, 0xae)))
        .with(Category::Selector, Style::color(Color::new(0xcf, 0x22, 0x2e)))
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "midnight" => Some(midnight()),
            "daylight" => Some(daylight()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#5c6690").unwrap(), Color::new(0x5c, 0x66, 0x90));
        assert_eq!(Color::from_hex("fff").unwrap(), Color::new(255, 255, 255));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn css_has_rule_per_styled_category() {
        let theme = builtin::midnight();
        let css = theme.css();
        for category in CATEGORIES {
            if theme.style(*category).is_some() {
                assert!(
                    css.contains(&format!("[class$=\"-{}\"]", category.name())),
                    "missing rule for {}",
                    category.name()
                );
            }
        }
        assert!(css.starts_with(".midnight {"));
    }

    #[test]
    fn empty_style_emits_no_rule() {
        let theme = Theme::new("bare").with(Category::Keyword, Style::default());
        assert!(!theme.css().contains("keyword"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_round_trip() {
        let theme = Theme::from_toml(
            r##"
            name = "custom"
            background = "#1e1e2e"
            keyword = { fg = "#cba6f7", modifiers = ["bold"] }
            string = "#a6e3a1"
            "##,
        )
        .unwrap();
        assert_eq!(theme.name, "custom");
        let keyword = theme.style(Category::Keyword).unwrap();
        assert!(keyword.bold);
        assert_eq!(keyword.color, Some(Color::new(0xcb, 0xa6, 0xf7)));
        assert!(theme.style(Category::Number).is_none());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_rejects_unknown_category() {
        let err = Theme::from_toml("sparkles = \"#ffffff\"").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownCategory(_)));
    }
}
