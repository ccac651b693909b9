//! Marker restoration.
//!
//! Replays token records newest-first, replacing each marker with its
//! span markup. Record text never contains markers (greedy passes absorb
//! inner records at freeze time), so every replacement is final.

use glint_theme::css_class;
use tracing::{error, warn};

use crate::placeholder::{MARKER_START, PlaceholderStore};

pub(crate) struct RestoreOutcome {
    pub html: String,
    pub residue: usize,
}

pub(crate) fn restore(text: String, store: &PlaceholderStore, prefix: &str) -> RestoreOutcome {
    let mut html = text;
    for record in store.records().iter().rev() {
        match html.find(record.marker.as_str()) {
            Some(pos) => {
                let span = format!(
                    "<span class=\"{}\">{}</span>",
                    css_class(prefix, record.category),
                    record.text
                );
                html.replace_range(pos..pos + record.marker.len(), &span);
            }
            None => warn!(
                category = record.category.name(),
                "token marker missing from working text"
            ),
        }
    }
    let residue = html.matches(MARKER_START).count();
    if residue > 0 {
        error!(residue, "unrestored placeholder markers left in output");
        debug_assert_eq!(residue, 0, "unrestored placeholder markers left in output");
    }
    RestoreOutcome { html, residue }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_theme::Category;

    #[test]
    fn replays_records_into_spans() {
        let mut store = PlaceholderStore::new();
        let kw = store.freeze("const".into(), Category::Keyword);
        let num = store.freeze("10".into(), Category::Number);
        let outcome = restore(format!("{kw} x = {num};"), &store, "js");
        assert_eq!(
            outcome.html,
            "<span class=\"js-keyword\">const</span> x = <span class=\"js-number\">10</span>;"
        );
        assert_eq!(outcome.residue, 0);
    }
}
