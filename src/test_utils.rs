//! Shared builders for tests.
#![cfg(test)]

use crate::document::{
    TranslationState,
    TsContext,
    TsDocument,
    TsMessage,
};

/// A finished message without location hints or comment.
pub(crate) fn message(source: &str, translation: &str) -> TsMessage {
    TsMessage {
        source: source.to_string(),
        translation: translation.to_string(),
        ..TsMessage::default()
    }
}

pub(crate) fn message_with_state(
    source: &str,
    translation: &str,
    state: TranslationState,
) -> TsMessage {
    TsMessage { state, ..message(source, translation) }
}

pub(crate) fn context(name: &str, messages: Vec<TsMessage>) -> TsContext {
    TsContext { name: name.to_string(), messages }
}

/// A `fr`/`en` TS 2.0 document, matching the fixture's header.
pub(crate) fn document(contexts: Vec<TsContext>) -> TsDocument {
    TsDocument {
        version: Some("2.0".to_string()),
        language: Some("fr".to_string()),
        source_language: Some("en".to_string()),
        contexts,
    }
}
