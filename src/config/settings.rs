//! User settings for spendlog
//!
//! A small JSON config file holding display preferences. Every field has
//! a serde default so older config files keep loading as fields are
//! added.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display formatting
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if it
    /// does not exist yet.
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Invalid settings file: {}", e)))
    }

    /// Write settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}
