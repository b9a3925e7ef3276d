use serde::{Deserialize, Serialize};

use super::window::WindowPreset;
use crate::errors::CoreError;

/// Tunables of the analytics engine. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Named categories in a composition mix before the rest goes to "Other"
    pub top_n: usize,

    /// Most recent years shown on the composition mix cards
    pub mix_years: usize,

    /// Rows in the lifetime leaderboards and YoY movers lists
    pub ranking_limit: usize,

    /// Dashboards kept in the memo table before it is cleared
    pub memo_capacity: usize,

    pub default_preset: WindowPreset,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            top_n: 7,
            mix_years: 6,
            ranking_limit: 10,
            memo_capacity: 16,
            default_preset: WindowPreset::All,
        }
    }
}

impl EngineSettings {
    /// Load settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: EngineSettings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.top_n == 0 {
            return Err(CoreError::InvalidSettings("top_n must be at least 1".into()));
        }
        if self.mix_years == 0 {
            return Err(CoreError::InvalidSettings("mix_years must be at least 1".into()));
        }
        if self.memo_capacity == 0 {
            return Err(CoreError::InvalidSettings(
                "memo_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
