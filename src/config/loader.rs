//! Lint settings discovery and loading.

use std::path::Path;

use super::{
    ConfigError,
    LintSettings,
};

/// Name of the settings file looked up next to the catalogs.
const CONFIG_FILE_NAME: &str = ".ts-catalog.json";

/// Load settings from a directory, if a `.ts-catalog.json` file exists there.
///
/// # Errors
/// Returns [`ConfigError`] when the file exists but cannot be read or parsed.
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<LintSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("loading configuration from: {:?}", config_path);
    load_from_path(&config_path).map(Some)
}

/// Load settings from an explicit file path.
///
/// # Errors
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub(super) fn load_from_path(path: &Path) -> Result<LintSettings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: LintSettings = serde_json::from_str(&content)?;
    Ok(settings)
}
