//! Positional placeholder scanning.
//!
//! Qt strings mark substitution points with `%1` through `%99`, optionally
//! with an `L` modifier for locale-aware number formatting (`%L1`). A
//! translation must carry exactly the placeholders of its source string, in
//! count and form; position inside the text is free.

use std::collections::BTreeSet;
use std::fmt;

/// One positional marker, e.g. `%1` or `%L2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder {
    pub index: u8,
    /// `%Ln` form: the substituted number is localized.
    pub localized: bool,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.localized {
            write!(f, "%L{}", self.index)
        } else {
            write!(f, "%{}", self.index)
        }
    }
}

/// Extract the set of placeholders of a display string.
///
/// A `%` not followed by one or two digits (or `L` and digits) is literal
/// text and ignored. Two-digit markers are read greedily, matching Qt's
/// longest-match rule, so `%12` is marker twelve rather than `%1` and a `2`.
#[must_use]
pub fn placeholders(text: &str) -> BTreeSet<Placeholder> {
    let bytes = text.as_bytes();
    let mut set = BTreeSet::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes.get(i) != Some(&b'%') {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        let localized = bytes.get(j) == Some(&b'L');
        if localized {
            j += 1;
        }
        let mut index: u8 = 0;
        let mut digits = 0;
        while digits < 2 {
            match bytes.get(j) {
                Some(digit) if digit.is_ascii_digit() => {
                    index = index * 10 + (digit - b'0');
                    j += 1;
                    digits += 1;
                }
                _ => break,
            }
        }
        if digits == 0 {
            // Literal '%' (or "%L") without a marker number.
            i += 1;
            continue;
        }
        set.insert(Placeholder { index, localized });
        i = j;
    }
    set
}

/// Render a placeholder set for diagnostics, e.g. `{%1, %2}`.
#[must_use]
pub fn format_set(set: &BTreeSet<Placeholder>) -> String {
    let inner = set.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!("{{{inner}}}")
}
