//! The classifier pipeline.
//!
//! Runs a definition's passes in order over the escaped working text.
//! Each pass replaces the spans it classifies with placeholder markers,
//! so later passes cannot re-match text an earlier pass already claimed;
//! precedence is entirely encoded in the pass order.

use glint_theme::Category;
use regex::Regex;
use tracing::trace;

use crate::Error;
use crate::declarations::DeclarationSet;
use crate::language::{DeclarationForm, LanguageDefinition, Matcher, Pass};
use crate::placeholder::{MARKER_END, MARKER_START, PlaceholderStore};

pub(crate) fn run(
    def: &LanguageDefinition,
    escaped: &str,
    store: &mut PlaceholderStore,
    decls: &mut DeclarationSet,
) -> Result<String, Error> {
    let mut text = escaped.to_owned();
    for pass in &def.passes {
        text = match pass {
            Pass::Strings => freeze_all(&def.strings, &text, store),
            Pass::Comments => freeze_all(&def.comments, &text, store),
            Pass::Parameters => parameters(def, text, store, decls)?,
            Pass::Delimiters => freeze_all(&def.delimiters, &text, store),
            Pass::Builtins => freeze_all(&def.builtins, &text, store),
            Pass::Numbers => freeze_all(&def.numbers, &text, store),
            Pass::Keywords => match &def.keyword_matcher {
                Some(matcher) => freeze_matches(matcher, &text, store),
                None => text,
            },
            Pass::Declarations => declarations(def, &text, store, decls),
            Pass::IdentifierUsage => identifier_usage(def, &text, store, decls),
        };
        trace!(language = def.id, ?pass, tokens = store.len(), "pass complete");
    }
    Ok(text)
}

fn freeze_all(matchers: &[Matcher], text: &str, store: &mut PlaceholderStore) -> String {
    let mut out = text.to_owned();
    for matcher in matchers {
        out = freeze_matches(matcher, &out, store);
    }
    out
}

fn freeze_matches(matcher: &Matcher, text: &str, store: &mut PlaceholderStore) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in matcher.regex.captures_iter(text) {
        let m = match matcher.group {
            Some(group) => caps.get(group),
            None => caps.get(0),
        };
        let Some(m) = m else { continue };
        out.push_str(&text[last..m.start()]);
        let marker = if matcher.absorb {
            store.freeze_absorbing(m.as_str(), matcher.category)
        } else {
            store.freeze(m.as_str().to_owned(), matcher.category)
        };
        out.push_str(&marker);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Detect function heads, record their names, and freeze every occurrence
/// of each head's parameter names. Function names are recorded only: their
/// occurrences are left for the declaration and identifier-usage passes,
/// so an intervening pass (builtins) can still claim a colliding name.
fn parameters(
    def: &LanguageDefinition,
    text: String,
    store: &mut PlaceholderStore,
    decls: &mut DeclarationSet,
) -> Result<String, Error> {
    let mut functions: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();
    for form in &def.function_forms {
        for caps in form.regex.captures_iter(&text) {
            if let Some(name) = form.name_group.and_then(|g| caps.get(g)) {
                let name = name.as_str();
                if !def.keywords.contains(&name)
                    && !def.skip_function_names.contains(&name)
                    && !functions.iter().any(|f| f == name)
                {
                    functions.push(name.to_owned());
                }
            }
            let list = form.params_group.and_then(|g| caps.get(g));
            if let (Some(param_name), Some(list)) = (def.param_name.as_ref(), list) {
                for segment in list.as_str().split(',') {
                    let Some(caps) = param_name.captures(segment) else {
                        continue;
                    };
                    let Some(name) = caps.get(1) else { continue };
                    let name = name.as_str();
                    if !def.keywords.contains(&name) && !params.iter().any(|p| p == name) {
                        params.push(name.to_owned());
                    }
                }
            }
        }
    }

    for name in &functions {
        decls.record_function(name);
    }
    let mut out = text;
    for name in &params {
        if decls.is_function(name) {
            continue;
        }
        out = freeze_word(&out, name, Category::Parameter, store)?;
    }
    Ok(out)
}

/// Freeze every standalone occurrence of `name`.
fn freeze_word(
    text: &str,
    name: &str,
    category: Category,
    store: &mut PlaceholderStore,
) -> Result<String, Error> {
    let regex = Regex::new(&word_pattern(name))?;
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in regex.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(&store.freeze(m.as_str().to_owned(), category));
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// `\b`-anchor a literal name, except on a side where the name's own edge
/// character is not a word character (e.g. a leading `$`).
fn word_pattern(name: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut pattern = String::with_capacity(name.len() + 4);
    if name.starts_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(name));
    if name.ends_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn declarations(
    def: &LanguageDefinition,
    text: &str,
    store: &mut PlaceholderStore,
    decls: &mut DeclarationSet,
) -> String {
    let mut out = text.to_owned();
    for form in &def.declaration_forms {
        out = declaration_form(form, &out, store, decls);
    }
    out
}

fn declaration_form(
    form: &DeclarationForm,
    text: &str,
    store: &mut PlaceholderStore,
    decls: &mut DeclarationSet,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in form.regex.captures_iter(text) {
        let (Some(binder), Some(name)) = (caps.get(form.binder_group), caps.get(form.name_group))
        else {
            continue;
        };
        let binder_text = if form.binder_is_marker {
            match store.text_for(binder.as_str()) {
                Some(resolved) => resolved,
                None => continue,
            }
        } else {
            binder.as_str()
        };
        if form.binder_is_marker && repeats_binder(text, binder.end(), binder_text, store) {
            continue;
        }
        let Some((_, category)) = form.bindings.iter().find(|(b, _)| *b == binder_text) else {
            continue;
        };
        // a name already recorded as a function stays a function, even
        // when a later binder would re-record it as a variable
        let category = if decls.is_function(name.as_str()) {
            Category::Function
        } else {
            *category
        };
        match category {
            Category::Function => decls.record_function(name.as_str()),
            _ => decls.record_variable(name.as_str()),
        }
        out.push_str(&text[last..name.start()]);
        out.push_str(&store.freeze(name.as_str().to_owned(), category));
        last = name.end();
    }
    out.push_str(&text[last..]);
    out
}

/// A doubled delimiter (`==`) is a comparison, not a binding.
fn repeats_binder(
    text: &str,
    from: usize,
    binder_text: &str,
    store: &PlaceholderStore,
) -> bool {
    let rest = &text[from..];
    if !rest.starts_with(MARKER_START) {
        return false;
    }
    match rest.find(MARKER_END) {
        Some(end) => store.text_for(&rest[..=end]) == Some(binder_text),
        None => false,
    }
}

/// Freeze remaining occurrences of declared names.
fn identifier_usage(
    def: &LanguageDefinition,
    text: &str,
    store: &mut PlaceholderStore,
    decls: &DeclarationSet,
) -> String {
    let Some(identifier) = def.identifier.as_ref() else {
        return text.to_owned();
    };
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in identifier.find_iter(text) {
        let Some(category) = decls.lookup(m.as_str()) else {
            continue;
        };
        out.push_str(&text[last..m.start()]);
        out.push_str(&store.freeze(m.as_str().to_owned(), category));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_patterns_anchor_on_word_edges() {
        assert_eq!(word_pattern("name"), r"\bname\b");
        assert_eq!(word_pattern("$el"), r"\$el\b");
    }

    #[test]
    fn freeze_word_skips_partial_matches() {
        let mut store = PlaceholderStore::new();
        let out = freeze_word("name rename name", "name", Category::Parameter, &mut store).unwrap();
        assert_eq!(store.len(), 2);
        assert!(out.contains("rename"));
    }
}
