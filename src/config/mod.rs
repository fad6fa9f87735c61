//! Linter configuration: per-check severities, loaded from an optional
//! `.ts-catalog.json` next to the catalogs.

mod loader;
mod types;

pub use types::{
    ConfigError,
    LintSettings,
    Severity,
};

use std::path::Path;

/// Load settings from a directory, falling back to defaults when no
/// `.ts-catalog.json` is present.
///
/// # Errors
/// Returns [`ConfigError`] when a settings file exists but cannot be read or
/// parsed.
pub fn load_or_default(dir: &Path) -> Result<LintSettings, ConfigError> {
    Ok(loader::load_from_dir(dir)?.unwrap_or_default())
}

/// Load settings from an explicit file path.
///
/// # Errors
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<LintSettings, ConfigError> {
    loader::load_from_path(path)
}
