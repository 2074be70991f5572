use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::parser;
use crate::processing::statistics::SeriesSummary;
use crate::state::data_series::DataSeries;
use crate::state::settings::DEFAULT_SERIES;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Playground state: the number list as typed, plus the sample it resets to.
///
/// The series and summary are derived from `input` on every call and never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub input: String,
    #[serde(default = "default_sample")]
    pub sample: String,
}

fn default_sample() -> String {
    DEFAULT_SERIES.to_string()
}

/// What a chart and stats view consume for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub points: DataSeries,
    pub summary: Option<SeriesSummary>,
    pub count: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_sample(DEFAULT_SERIES)
    }

    /// Start from `sample`, which is also what `reset_to_sample` restores.
    pub fn with_sample(sample: &str) -> Self {
        Self {
            input: sample.to_string(),
            sample: sample.to_string(),
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn reset_to_sample(&mut self) {
        self.input = self.sample.clone();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn series(&self) -> DataSeries {
        parser::parse_series(&self.input)
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        self.series().summary()
    }

    pub fn snapshot(&self) -> Snapshot {
        let points = self.series();
        let summary = points.summary();
        let count = points.point_count();
        Snapshot {
            points,
            summary,
            count,
        }
    }

    /// Save the state as a pretty-printed JSON project file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize project: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to save project: {e}"))?;
        tracing::info!("Project saved to {:?}", path);
        Ok(())
    }

    /// Load a project file written by [`AppState::save`].
    pub fn load(path: &Path) -> Result<Self, String> {
        let json =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {e}"))?;
        let state = serde_json::from_str::<AppState>(&json)
            .map_err(|e| format!("Failed to parse project: {e}"))?;
        tracing::info!("Project loaded from {:?}", path);
        Ok(state)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
