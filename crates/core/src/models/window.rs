use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Time-window preset chosen in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowPreset {
    /// Everything since the first year with data
    #[default]
    All,
    ThreeYears,
    FiveYears,
    TenYears,
}

impl WindowPreset {
    /// Number of calendar years the preset asks for, `None` for `All`.
    pub fn years(self) -> Option<i32> {
        match self {
            WindowPreset::All => None,
            WindowPreset::ThreeYears => Some(3),
            WindowPreset::FiveYears => Some(5),
            WindowPreset::TenYears => Some(10),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowPreset::All => "all",
            WindowPreset::ThreeYears => "3",
            WindowPreset::FiveYears => "5",
            WindowPreset::TenYears => "10",
        }
    }
}

impl std::fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WindowPreset::All),
            "3" => Ok(WindowPreset::ThreeYears),
            "5" => Ok(WindowPreset::FiveYears),
            "10" => Ok(WindowPreset::TenYears),
            _ => Err(CoreError::InvalidPreset(s.to_string())),
        }
    }
}

impl TryFrom<String> for WindowPreset {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowPreset> for String {
    fn from(value: WindowPreset) -> Self {
        value.as_str().to_string()
    }
}

/// Which family of views the dashboard shows.
/// Does not change how any individual view is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReportMode {
    Yearly,
    #[default]
    Total,
}

impl ReportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportMode::Yearly => "yearly",
            ReportMode::Total => "total",
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(ReportMode::Yearly),
            "total" => Ok(ReportMode::Total),
            _ => Err(CoreError::InvalidReportMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReportMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReportMode> for String {
    fn from(value: ReportMode) -> Self {
        value.as_str().to_string()
    }
}

/// Concrete, inclusive date range a preset resolves to. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WindowRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True if any day of `year` falls inside the range.
    pub fn contains_year(&self, year: i32) -> bool {
        year >= self.start.year() && year <= self.end.year()
    }
}
