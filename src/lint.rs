//! Data-quality checks over a parsed catalog.
//!
//! Within a context, a source string should map to exactly one active
//! translation, and that translation must carry the source's placeholders.
//! Obsolete entries are historical records: they are exempt from every check
//! and never deduplicated.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{
    LintSettings,
    Severity,
};
use crate::document::{
    TranslationState,
    TsDocument,
    TsMessage,
};
use crate::placeholder::{
    format_set,
    placeholders,
};

/// The check a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintCheck {
    PlaceholderMismatch,
    ConflictingTranslations,
    DuplicateEntry,
    EmptyTranslation,
    Unfinished,
}

/// One finding, addressed by the `(context, source)` pair it concerns.
#[derive(Debug, Clone, Serialize)]
pub struct LintMessage {
    pub check: LintCheck,
    pub severity: Severity,
    pub context: String,
    pub source: String,
    pub message: String,
}

/// Run all enabled checks over a document.
#[must_use]
pub fn lint_document(document: &TsDocument, settings: &LintSettings) -> Vec<LintMessage> {
    let mut findings = Vec::new();

    for context in &document.contexts {
        if settings.ignored_contexts.contains(&context.name) {
            tracing::debug!(context = %context.name, "skipping ignored context");
            continue;
        }

        let mut first_translation: HashMap<&str, &str> = HashMap::new();
        for message in context.messages.iter().filter(|message| message.is_active()) {
            check_placeholders(&mut findings, settings, &context.name, message);
            check_completeness(&mut findings, settings, &context.name, message);

            match first_translation.get(message.source.as_str()) {
                None => {
                    first_translation.insert(&message.source, &message.translation);
                }
                Some(first) if *first == message.translation => push(
                    &mut findings,
                    settings.duplicate_entry,
                    LintCheck::DuplicateEntry,
                    &context.name,
                    &message.source,
                    "entry is repeated with an identical translation".to_string(),
                ),
                Some(first) => push(
                    &mut findings,
                    settings.conflicting_translations,
                    LintCheck::ConflictingTranslations,
                    &context.name,
                    &message.source,
                    format!(
                        "conflicting active translations: {first:?} vs {:?}",
                        message.translation
                    ),
                ),
            }
        }
    }

    tracing::debug!(findings = findings.len(), "lint finished");
    findings
}

/// Whether any finding must fail the run.
#[must_use]
pub fn has_errors(findings: &[LintMessage]) -> bool {
    findings.iter().any(|finding| finding.severity == Severity::Error)
}

fn check_placeholders(
    findings: &mut Vec<LintMessage>,
    settings: &LintSettings,
    context: &str,
    message: &TsMessage,
) {
    if message.translation.is_empty() {
        // An untranslated entry falls back to the source string at lookup
        // time; only check_completeness has something to say about it.
        return;
    }
    let expected = placeholders(&message.source);
    let actual = placeholders(&message.translation);
    if expected != actual {
        push(
            findings,
            settings.placeholder_mismatch,
            LintCheck::PlaceholderMismatch,
            context,
            &message.source,
            format!(
                "placeholder mismatch: source has {}, translation has {}",
                format_set(&expected),
                format_set(&actual)
            ),
        );
    }
}

fn check_completeness(
    findings: &mut Vec<LintMessage>,
    settings: &LintSettings,
    context: &str,
    message: &TsMessage,
) {
    if message.state == TranslationState::Unfinished {
        push(
            findings,
            settings.unfinished,
            LintCheck::Unfinished,
            context,
            &message.source,
            "translation is still marked unfinished".to_string(),
        );
    } else if message.translation.is_empty() {
        push(
            findings,
            settings.empty_translation,
            LintCheck::EmptyTranslation,
            context,
            &message.source,
            "finished entry has an empty translation".to_string(),
        );
    }
}

fn push(
    findings: &mut Vec<LintMessage>,
    severity: Severity,
    check: LintCheck,
    context: &str,
    source: &str,
    message: String,
) {
    if severity == Severity::Off {
        return;
    }
    findings.push(LintMessage {
        check,
        severity,
        context: context.to_string(),
        source: source.to_string(),
        message,
    });
}
