//! `(context, source)` lookup over the active entries of a catalog.

use std::collections::HashMap;

use crate::document::TsDocument;

/// Read-only lookup index built from a parsed [`TsDocument`].
///
/// Only active (non-obsolete) entries with a non-empty translation are
/// indexed. When a context holds several active entries for the same source
/// string the first one wins; reporting the conflict is the linter's job,
/// lookup never guesses between candidates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    contexts: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    #[must_use]
    pub fn from_document(document: &TsDocument) -> Self {
        let mut contexts: HashMap<String, HashMap<String, String>> = HashMap::new();
        for context in &document.contexts {
            let entries = contexts.entry(context.name.clone()).or_default();
            for message in &context.messages {
                if !message.is_active() || message.translation.is_empty() {
                    continue;
                }
                entries
                    .entry(message.source.clone())
                    .or_insert_with(|| message.translation.clone());
            }
        }
        let catalog = Self { contexts };
        tracing::debug!(
            contexts = catalog.contexts.len(),
            entries = catalog.len(),
            "indexed catalog"
        );
        catalog
    }

    /// Resolve a pair to its translation, if an active entry exists.
    #[must_use]
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.contexts.get(context)?.get(source).map(String::as_str)
    }

    /// Resolve a pair, falling back to the source string itself when no
    /// active entry exists. An empty translation (an untranslated
    /// `unfinished` entry) also falls back rather than blanking the UI.
    #[must_use]
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source).unwrap_or(source)
    }

    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Total number of indexed entries across all contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::document::TranslationState;
    use crate::test_utils::{
        context,
        document,
        message,
        message_with_state,
    };

    #[googletest::test]
    fn test_lookup_known_pair() {
        let catalog = Catalog::from_document(&document(vec![
            context("Themes", vec![message("Search", "Rechercher")]),
            context("themesOptions", vec![message(" KB/s", " Ko/s")]),
        ]));

        expect_that!(catalog.lookup("Themes", "Search"), some(eq("Rechercher")));
        expect_that!(catalog.lookup("themesOptions", " KB/s"), some(eq(" Ko/s")));
        expect_that!(catalog.len(), eq(2));
    }

    #[googletest::test]
    fn test_translate_falls_back_to_source() {
        let catalog = Catalog::from_document(&document(vec![context(
            "Themes",
            vec![message("Search", "Rechercher")],
        )]));

        expect_that!(catalog.translate("Themes", "Copy list"), eq("Copy list"));
        expect_that!(catalog.translate("unknownContext", "Search"), eq("Search"));
        expect_that!(catalog.translate("Themes", "Search"), eq("Rechercher"));
    }

    #[googletest::test]
    fn test_obsolete_entries_are_not_indexed() {
        let catalog = Catalog::from_document(&document(vec![context(
            "themesOptions",
            vec![
                message_with_state(
                    "Limit copy speed at:",
                    "Limiter la vitesse de copie à:",
                    TranslationState::Obsolete,
                ),
                message("Limit copy speed to:", "Limiter la vitesse de copie à:"),
            ],
        )]));

        expect_that!(catalog.lookup("themesOptions", "Limit copy speed at:"), none());
        expect_that!(
            catalog.translate("themesOptions", "Limit copy speed at:"),
            eq("Limit copy speed at:")
        );
        expect_that!(
            catalog.translate("themesOptions", "Limit copy speed to:"),
            eq("Limiter la vitesse de copie à:")
        );
    }

    #[googletest::test]
    fn test_empty_unfinished_translation_falls_back() {
        let catalog = Catalog::from_document(&document(vec![context(
            "Themes",
            vec![message_with_state("Always close", "", TranslationState::Unfinished)],
        )]));

        expect_that!(catalog.lookup("Themes", "Always close"), none());
        expect_that!(catalog.translate("Themes", "Always close"), eq("Always close"));
    }

    #[googletest::test]
    fn test_first_active_entry_wins_on_conflict() {
        let catalog = Catalog::from_document(&document(vec![context(
            "Themes",
            vec![message("Search", "Rechercher"), message("Search", "Chercher")],
        )]));

        expect_that!(catalog.lookup("Themes", "Search"), some(eq("Rechercher")));
    }

    #[googletest::test]
    fn test_same_source_in_different_contexts() {
        let catalog = Catalog::from_document(&document(vec![
            context("Themes", vec![message("Never close", "Ne jamais fermer")]),
            context("ThemesFactory", vec![message("Never close", "Ne jamais fermer")]),
        ]));

        expect_that!(catalog.context_names().count(), eq(2));
        expect_that!(catalog.lookup("Themes", "Never close"), some(eq("Ne jamais fermer")));
        expect_that!(catalog.lookup("ThemesFactory", "Never close"), some(eq("Ne jamais fermer")));
    }
}
