//! Reading and writing the TS file format.

mod reader;
mod writer;

pub use reader::parse_document;
pub use writer::write_document;

use thiserror::Error;

/// Errors raised while reading a TS catalog.
///
/// Malformed markup rejects the file outright: silently emitting corrupted
/// display strings would be worse than failing to load the catalog.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("expected <TS> root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("unexpected <{element}> inside <{parent}>")]
    UnexpectedElement { element: String, parent: String },
    #[error("unexpected text {text:?} inside <{parent}>")]
    StrayText { text: String, parent: String },
    #[error("<context> is missing its <name>")]
    MissingContextName,
    #[error("<message> is missing its <source>")]
    MissingSource,
    #[error("invalid line hint {0:?} in <location>")]
    InvalidLineHint(String),
    #[error("unknown translation type {0:?}")]
    UnknownTranslationType(String),
    #[error("unexpected end of file")]
    UnexpectedEof,
}
