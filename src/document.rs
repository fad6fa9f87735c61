//! Data model for Qt Linguist TS translation catalogs.
//!
//! A document is an ordered list of named contexts, each holding an ordered
//! list of messages. Everything here is plain data: order, location hints and
//! obsolete entries are preserved exactly as authored so that a parsed
//! document can be written back without losing history.

use std::fmt;

/// Completeness state of a translation, from the `type` attribute of
/// `<translation>`.
///
/// `Finished` and `Unfinished` entries are *active*: they are candidates for
/// lookup. `Obsolete` and `Vanished` entries are retained for reference only
/// and never resolve a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationState {
    /// Translated and in use (no `type` attribute).
    #[default]
    Finished,
    /// Present but not yet translated or reviewed.
    Unfinished,
    /// No longer bound to active UI, kept as a historical record.
    Obsolete,
    /// Qt 5 spelling of obsolete, emitted by newer `lupdate` runs.
    Vanished,
}

impl TranslationState {
    /// Whether an entry in this state participates in lookup.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }

    /// Value of the `type` attribute, `None` for the finished default.
    #[must_use]
    pub const fn type_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    /// Parse a `type` attribute value. Returns `None` for unknown values.
    #[must_use]
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            _ => None,
        }
    }
}

/// A line hint inside a `<location>` element.
///
/// `lupdate` writes the first location of a file as an absolute line and
/// subsequent ones as signed offsets (`line="+199"`, `line="-10"`). The
/// distinction is kept verbatim: hints are advisory and resolving offsets
/// would destroy round-trip fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRef {
    /// A plain line number.
    Absolute(u32),
    /// A signed offset relative to the previous location in the same file.
    Offset(i32),
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absolute(line) => write!(f, "{line}"),
            Self::Offset(delta) if delta >= 0 => write!(f, "+{delta}"),
            Self::Offset(delta) => write!(f, "{delta}"),
        }
    }
}

/// Source-location hint for translator tooling. Carries no runtime meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Path of the UI definition or source file, as written by `lupdate`.
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

/// One source-string/translation-string pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TsMessage {
    /// Zero or more location hints. Obsolete entries typically have none;
    /// strings used in several places carry several.
    pub locations: Vec<Location>,
    /// Original (source-language) display string.
    pub source: String,
    /// Localized replacement, same placeholder contract as `source`.
    pub translation: String,
    /// Optional disambiguation comment from the developer.
    pub comment: Option<String>,
    pub state: TranslationState,
}

impl TsMessage {
    /// Whether this entry participates in lookup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

/// A named group of messages, usually one per UI surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TsMessage>,
}

/// A whole TS catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TsDocument {
    /// Format version from the `<TS>` element, e.g. `"2.0"`.
    pub version: Option<String>,
    /// Target language, e.g. `"fr"`.
    pub language: Option<String>,
    /// Source language, e.g. `"en"`.
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

impl TsDocument {
    /// Find a context by name. Context names are not guaranteed unique; the
    /// first match wins.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&TsContext> {
        self.contexts.iter().find(|context| context.name == name)
    }

    /// All messages of the document, paired with their context name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TsMessage)> {
        self.contexts
            .iter()
            .flat_map(|context| context.messages.iter().map(|message| (context.name.as_str(), message)))
    }
}
