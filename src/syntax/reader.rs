//! Streaming TS reader built on `quick-xml`.
//!
//! The grammar is small and rigid, so each nesting level gets its own loop:
//! `<TS>` holds `<context>` elements, a context holds `<name>` and
//! `<message>` elements, and a message holds `<location>`, `<source>`,
//! `<comment>` and `<translation>`. Anything else is rejected rather than
//! skipped, so nothing is silently lost on a later write.

use quick_xml::Reader;
use quick_xml::events::{
    BytesStart,
    BytesText,
    Event,
};

use super::ParseError;
use crate::document::{
    LineRef,
    Location,
    TranslationState,
    TsContext,
    TsDocument,
    TsMessage,
};

/// Parse a TS catalog from its textual form.
///
/// # Errors
/// Returns [`ParseError`] for malformed markup, invalid escapes, or elements
/// outside the TS grammar.
pub fn parse_document(input: &str) -> Result<TsDocument, ParseError> {
    let mut reader = Reader::from_str(input);
    let mut document = None;

    loop {
        match reader.read_event()? {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) => reject_stray_text(&text, "document")?,
            Event::Start(e) if e.name().as_ref() == b"TS" => {
                let mut doc = read_ts_attributes(&e)?;
                read_contexts(&mut reader, &mut doc)?;
                document = Some(doc);
            }
            Event::Empty(e) if e.name().as_ref() == b"TS" => {
                document = Some(read_ts_attributes(&e)?);
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(ParseError::UnexpectedRoot(element_name(&e)));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let document = document.ok_or(ParseError::UnexpectedEof)?;
    tracing::debug!(
        contexts = document.contexts.len(),
        messages = document.entries().count(),
        "parsed TS catalog"
    );
    Ok(document)
}

fn read_ts_attributes(e: &BytesStart<'_>) -> Result<TsDocument, ParseError> {
    let mut document = TsDocument::default();
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"version" => document.version = Some(attr.unescape_value()?.into_owned()),
            b"language" => document.language = Some(attr.unescape_value()?.into_owned()),
            b"sourcelanguage" => {
                document.source_language = Some(attr.unescape_value()?.into_owned());
            }
            _ => {}
        }
    }
    Ok(document)
}

fn read_contexts(
    reader: &mut Reader<&[u8]>,
    document: &mut TsDocument,
) -> Result<(), ParseError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"context" => {
                document.contexts.push(read_context(reader)?);
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(unexpected(&e, "TS"));
            }
            Event::Text(text) => reject_stray_text(&text, "TS")?,
            Event::Comment(_) => {}
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
    }
}

fn read_context(reader: &mut Reader<&[u8]>) -> Result<TsContext, ParseError> {
    let mut name = None;
    let mut messages = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"name" => name = Some(read_text(reader, "name")?),
                b"message" => messages.push(read_message(reader)?),
                _ => return Err(unexpected(&e, "context")),
            },
            Event::Empty(e) => return Err(unexpected(&e, "context")),
            Event::Text(text) => reject_stray_text(&text, "context")?,
            Event::Comment(_) => {}
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
    }

    let name = name.ok_or(ParseError::MissingContextName)?;
    Ok(TsContext { name, messages })
}

fn read_message(reader: &mut Reader<&[u8]>) -> Result<TsMessage, ParseError> {
    let mut message = TsMessage::default();
    let mut source = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"location" => {
                    message.locations.push(read_location(&e)?);
                    reader.read_to_end(e.name())?;
                }
                b"source" => source = Some(read_text(reader, "source")?),
                b"comment" => message.comment = Some(read_text(reader, "comment")?),
                b"translation" => {
                    message.state = read_translation_state(&e)?;
                    message.translation = read_text(reader, "translation")?;
                }
                _ => return Err(unexpected(&e, "message")),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"location" => message.locations.push(read_location(&e)?),
                b"source" => source = Some(String::new()),
                b"comment" => message.comment = Some(String::new()),
                b"translation" => {
                    message.state = read_translation_state(&e)?;
                    message.translation = String::new();
                }
                _ => return Err(unexpected(&e, "message")),
            },
            Event::Text(text) => reject_stray_text(&text, "message")?,
            Event::Comment(_) => {}
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
    }

    message.source = source.ok_or(ParseError::MissingSource)?;
    Ok(message)
}

fn read_location(e: &BytesStart<'_>) -> Result<Location, ParseError> {
    let mut location = Location::default();
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"filename" => location.filename = Some(attr.unescape_value()?.into_owned()),
            b"line" => location.line = Some(parse_line_ref(&attr.unescape_value()?)?),
            _ => {}
        }
    }
    Ok(location)
}

fn read_translation_state(e: &BytesStart<'_>) -> Result<TranslationState, ParseError> {
    let mut state = TranslationState::Finished;
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"type" {
            let value = attr.unescape_value()?;
            state = TranslationState::from_type_attr(&value)
                .ok_or_else(|| ParseError::UnknownTranslationType(value.into_owned()))?;
        }
    }
    Ok(state)
}

fn parse_line_ref(value: &str) -> Result<LineRef, ParseError> {
    let parsed = if value.starts_with('+') || value.starts_with('-') {
        value.parse::<i32>().ok().map(LineRef::Offset)
    } else {
        value.parse::<u32>().ok().map(LineRef::Absolute)
    };
    parsed.ok_or_else(|| ParseError::InvalidLineHint(value.to_string()))
}

/// Collect the character data of a leaf element up to its end tag.
fn read_text(reader: &mut Reader<&[u8]>, parent: &str) -> Result<String, ParseError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(data) => text.push_str(&String::from_utf8_lossy(&data)),
            Event::Start(e) | Event::Empty(e) => return Err(unexpected(&e, parent)),
            Event::Comment(_) => {}
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
    }
}

fn reject_stray_text(text: &BytesText<'_>, parent: &str) -> Result<(), ParseError> {
    let text = text.unescape()?;
    if text.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::StrayText { text: text.into_owned(), parent: parent.to_string() })
    }
}

fn unexpected(e: &BytesStart<'_>, parent: &str) -> ParseError {
    ParseError::UnexpectedElement { element: element_name(e), parent: parent.to_string() }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}
