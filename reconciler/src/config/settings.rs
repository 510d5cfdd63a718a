// Reconciler settings, loaded from a JSON file or defaulted.
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ReconcilerError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReconcilerSettings {
    // Sede used when a caller does not name one.
    pub default_location_id: Option<String>,
    pub pretty: bool,
    pub log_level: String,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        ReconcilerSettings {
            default_location_id: None,
            pretty: true,
            log_level: "info".to_string(),
        }
    }
}

impl ReconcilerSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReconcilerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
            .map_err(|e| ReconcilerError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e)))
    }

    pub fn from_json(raw: &str) -> Result<Self, ReconcilerError> {
        let settings: ReconcilerSettings = serde_json::from_str(raw)?;
        if settings.log_level.trim().is_empty() {
            return Err(ReconcilerError::ConfigError("log_level cannot be empty".to_string()));
        }
        Ok(settings)
    }
}
