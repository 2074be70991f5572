use std::path::Path;

use serde::{Deserialize, Serialize};

/// Values shown when the playground opens or is reset.
pub const DEFAULT_SERIES: &str = "5, 12, 8, 10, 20, 14, 18";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Text",
            OutputFormat::Json => "JSON",
        }
    }
}

/// User configuration, read from a JSON file. Missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Series restored by "reset to sample data".
    pub sample_series: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_series: DEFAULT_SERIES.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read settings {}: {e}", path.display()))?;
        let settings = Self::from_json(&json)?;
        tracing::info!("Settings loaded from {:?}", path);
        Ok(settings)
    }
}
