//! Round-trip and lint behavior on the real Supercopier French catalog.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use googletest::prelude::*;
use pretty_assertions::assert_eq;
use ts_catalog::config::LintSettings;
use ts_catalog::lint::lint_document;
use ts_catalog::{
    LineRef,
    TranslationState,
    parse_document,
    write_document,
};

const FIXTURE: &str = include_str!("fixtures/supercopier_fr.ts");

#[test]
fn test_round_trip_preserves_document() {
    let doc = parse_document(FIXTURE).unwrap();
    let rendered = write_document(&doc);
    let reparsed = parse_document(&rendered).unwrap();

    assert_eq!(doc, reparsed);
}

#[test]
fn test_writer_reproduces_linguist_layout_byte_for_byte() {
    let doc = parse_document(FIXTURE).unwrap();

    // The shipped fixture lacks a final newline; fmt adds one and changes
    // nothing else.
    assert_eq!(write_document(&doc), format!("{FIXTURE}\n"));
}

#[test]
fn test_round_trip_is_stable_after_one_pass() {
    // fmt output is canonical: writing it again changes nothing.
    let doc = parse_document(FIXTURE).unwrap();
    let first = write_document(&doc);
    let second = write_document(&parse_document(&first).unwrap());

    assert_eq!(first, second);
}

#[googletest::test]
fn test_round_trip_preserves_every_entry_tuple() {
    let doc = parse_document(FIXTURE).unwrap();
    let reparsed = parse_document(&write_document(&doc)).unwrap();

    let tuples = |d: &ts_catalog::TsDocument| {
        d.entries()
            .map(|(context, message)| {
                (
                    context.to_string(),
                    message.source.clone(),
                    message.translation.clone(),
                    message.state,
                )
            })
            .collect::<Vec<_>>()
    };

    assert_that!(tuples(&doc).len(), eq(52));
    assert_that!(tuples(&reparsed), eq(&tuples(&doc)));
}

#[googletest::test]
fn test_obsolete_records_survive_round_trip() {
    let doc = parse_document(FIXTURE).unwrap();
    let reparsed = parse_document(&write_document(&doc)).unwrap();

    let obsolete = |d: &ts_catalog::TsDocument| {
        d.entries()
            .filter(|(_, message)| message.state == TranslationState::Obsolete)
            .map(|(context, message)| (context.to_string(), message.source.clone()))
            .collect::<Vec<_>>()
    };

    // Historical edits stay distinct records, never deduplicated against the
    // active entries that replaced them.
    assert_that!(
        obsolete(&doc),
        elements_are![
            eq(&("interfaceCopy".to_string(), "Limit copy speed at:".to_string())),
            eq(&(
                "themesOptions".to_string(),
                "Start with the \"more button\" pushed".to_string()
            )),
            eq(&("themesOptions".to_string(), "Limit copy speed at:".to_string()))
        ]
    );
    assert_that!(obsolete(&reparsed), eq(&obsolete(&doc)));
}

#[googletest::test]
fn test_location_hints_survive_round_trip() {
    let doc = parse_document(FIXTURE).unwrap();

    let themes = doc.context("Themes").unwrap();
    let first = themes.messages.first().unwrap();
    assert_that!(first.locations.len(), eq(1));
    expect_that!(
        first.locations.first().unwrap().filename.as_deref(),
        some(eq("../../interface.cpp"))
    );
    expect_that!(first.locations.first().unwrap().line, some(eq(LineRef::Offset(199))));

    // "Select a color" is referenced from three lines.
    let select = themes.messages.iter().find(|m| m.source == "Select a color").unwrap();
    assert_that!(select.locations.len(), eq(3));

    let rendered = write_document(&doc);
    expect_that!(
        rendered,
        contains_substring("<location filename=\"../../interface.cpp\" line=\"+199\"/>")
    );
    expect_that!(rendered, contains_substring("<location line=\"-10\"/>"));
}

#[googletest::test]
fn test_escaped_entities_round_trip_exactly() {
    let doc = parse_document(FIXTURE).unwrap();
    let rendered = write_document(&doc);

    expect_that!(rendered, contains_substring("<source>&amp;More</source>"));
    expect_that!(rendered, contains_substring("<translation>Pl&amp;us</translation>"));
    expect_that!(
        rendered,
        contains_substring("<source>Don&apos;t close if errors are found</source>")
    );
    expect_that!(
        rendered,
        contains_substring("Start with the &quot;more button&quot; pressed")
    );
}

#[googletest::test]
fn test_fixture_is_lint_clean() {
    // The shipped catalog has no active-entry defects: the duplicated
    // sources the linter would flag are all obsolete historical records.
    let doc = parse_document(FIXTURE).unwrap();

    let findings = lint_document(&doc, &LintSettings::default());

    assert_that!(findings, is_empty());
}
