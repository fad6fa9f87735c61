//! ts-catalog
//!
//! Parser, linter, and lookup catalog for Qt Linguist TS translation files.
//!
//! A TS catalog is an XML table of `(context, source)` → `translation`
//! entries. This crate reads and writes that format, resolves lookups with
//! fallback to the source string, and checks the table for data-quality
//! defects such as placeholder mismatches and conflicting entries.

pub mod catalog;
pub mod config;
pub mod document;
pub mod lint;
pub mod placeholder;
pub mod syntax;

#[cfg(test)]
mod test_utils;

pub use catalog::Catalog;
pub use document::{
    LineRef,
    Location,
    TranslationState,
    TsContext,
    TsDocument,
    TsMessage,
};
pub use syntax::{
    ParseError,
    parse_document,
    write_document,
};
