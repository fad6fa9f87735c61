//! TS serialization in Qt Linguist layout.
//!
//! Output matches what `lupdate`/`linguist` write: a UTF-8 declaration, the
//! `TS` doctype, four-space indentation, self-closing `<location>` hints and
//! full entity escaping (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`) so that
//! escaped markup round-trips exactly.

use quick_xml::escape::escape;

use crate::document::{
    Location,
    TsDocument,
    TsMessage,
};

/// Render a document back to its textual form.
#[must_use]
pub fn write_document(document: &TsDocument) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS");
    push_attribute(&mut out, "version", document.version.as_deref());
    push_attribute(&mut out, "language", document.language.as_deref());
    push_attribute(&mut out, "sourcelanguage", document.source_language.as_deref());
    out.push_str(">\n");

    for context in &document.contexts {
        out.push_str("<context>\n    <name>");
        out.push_str(&escape(&context.name));
        out.push_str("</name>\n");
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &TsMessage) {
    out.push_str("    <message>\n");
    for location in &message.locations {
        write_location(out, location);
    }

    out.push_str("        <source>");
    out.push_str(&escape(&message.source));
    out.push_str("</source>\n");

    if let Some(comment) = &message.comment {
        out.push_str("        <comment>");
        out.push_str(&escape(comment));
        out.push_str("</comment>\n");
    }

    out.push_str("        <translation");
    if let Some(state) = message.state.type_attr() {
        out.push_str(" type=\"");
        out.push_str(state);
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape(&message.translation));
    out.push_str("</translation>\n    </message>\n");
}

fn write_location(out: &mut String, location: &Location) {
    out.push_str("        <location");
    if let Some(filename) = &location.filename {
        out.push_str(" filename=\"");
        out.push_str(&escape(filename));
        out.push('"');
    }
    if let Some(line) = location.line {
        out.push_str(" line=\"");
        out.push_str(&line.to_string());
        out.push('"');
    }
    out.push_str("/>\n");
}

fn push_attribute(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}
