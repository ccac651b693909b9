//! Token records and collision-free placeholder markers.
//!
//! When a pass classifies a span it replaces the span's text with a
//! marker and keeps the original text in a [`TokenRecord`]. Later passes
//! then run over text in which every already-classified span is opaque:
//! a marker is `U+0001`, the record counter in binary written with
//! `U+0003`/`U+0004`, then `U+0002`. The body contains no word characters,
//! so word-boundary-anchored matchers cannot match into a marker, and the
//! control alphabet is stripped from raw input by the escaper, so no
//! marker can collide with user text.

use glint_theme::Category;

pub(crate) const MARKER_START: char = '\u{1}';
pub(crate) const MARKER_END: char = '\u{2}';
pub(crate) const MARKER_ZERO: char = '\u{3}';
pub(crate) const MARKER_ONE: char = '\u{4}';

/// Regex source matching exactly one marker.
pub(crate) const MARKER_PATTERN: &str = "\u{1}[\u{3}\u{4}]*\u{2}";

/// One classified span: the marker standing in for it, the escaped text
/// it replaced, and the category it will be rendered with.
#[derive(Debug, Clone)]
pub(crate) struct TokenRecord {
    pub marker: String,
    pub text: String,
    pub category: Category,
}

/// The per-render store of token records, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct PlaceholderStore {
    records: Vec<TokenRecord>,
    counter: usize,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified span and return the marker that replaces it.
    pub fn freeze(&mut self, text: String, category: Category) -> String {
        let marker = encode(self.counter);
        self.counter += 1;
        self.records.push(TokenRecord {
            marker: marker.clone(),
            text,
            category,
        });
        marker
    }

    /// Like [`freeze`](Self::freeze), but first expands any markers inside
    /// `text` back into their original spans and drops their records.
    ///
    /// Greedy matchers (comments, selectors) can legally cover spans that
    /// an earlier pass already froze; absorbing keeps the record set a
    /// partition of the text, so nothing is classified twice.
    pub fn freeze_absorbing(&mut self, text: &str, category: Category) -> String {
        let expanded = self.absorb(text);
        self.freeze(expanded, category)
    }

    fn absorb(&mut self, text: &str) -> String {
        if !text.contains(MARKER_START) {
            return text.to_owned();
        }
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(MARKER_START) {
            let Some(len) = rest[start..].find(MARKER_END) else {
                break;
            };
            let end = start + len + MARKER_END.len_utf8();
            out.push_str(&rest[..start]);
            let marker = &rest[start..end];
            match self.records.iter().position(|r| r.marker == marker) {
                Some(idx) => {
                    let inner = self.records.remove(idx);
                    out.push_str(&inner.text);
                }
                None => out.push_str(marker),
            }
            rest = &rest[end..];
        }
        out.push_str(rest);
        out
    }

    /// The original text behind a marker, if the marker is live.
    pub fn text_for(&self, marker: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.marker == marker)
            .map(|r| r.text.as_str())
    }

    /// Live records in insertion order.
    pub fn records(&self) -> &[TokenRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Encode a counter value as a marker, least significant bit first.
fn encode(mut n: usize) -> String {
    let mut marker = String::with_capacity(8);
    marker.push(MARKER_START);
    loop {
        marker.push(if n & 1 == 0 { MARKER_ZERO } else { MARKER_ONE });
        n >>= 1;
        if n == 0 {
            break;
        }
    }
    marker.push(MARKER_END);
    marker
}
