use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a lint finding is reported. `Off` disables the check entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Off => "off",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Per-check severities and exclusions for the linter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintSettings {
    pub placeholder_mismatch: Severity,
    pub conflicting_translations: Severity,
    pub duplicate_entry: Severity,
    pub empty_translation: Severity,
    /// Entries still marked `unfinished`; a translator worklist rather than
    /// a defect, hence `info` by default.
    pub unfinished: Severity,

    /// Context names exempt from all checks.
    pub ignored_contexts: Vec<String>,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            placeholder_mismatch: Severity::Error,
            conflicting_translations: Severity::Error,
            duplicate_entry: Severity::Warn,
            empty_translation: Severity::Warn,
            unfinished: Severity::Info,
            ignored_contexts: Vec::new(),
        }
    }
}
