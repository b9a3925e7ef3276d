use serde::{Deserialize, Serialize};

/// Reserved bucket name for everything outside the top N.
pub const OTHER_KEY: &str = "Other";

/// Neutral color of the "Other" bucket.
pub const OTHER_COLOR: &str = "#9ca3af";

/// Which side of the ledger a view describes. Picks the default palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Income,
    Expense,
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flow::Income => write!(f, "income"),
            Flow::Expense => write!(f, "expense"),
        }
    }
}

/// A composition key with its resolved chart color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesKey {
    pub name: String,
    pub color: String,
}

/// One stacked-bar row: a year and each key's share of that year.
///
/// `percentages` and `amounts` are aligned to [`CompositionMix::keys`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRow {
    pub year: i32,

    /// Absolute amount per key; the last entry is "Other"
    pub amounts: Vec<f64>,

    /// Share of the year total per key, all zero when the year total is zero
    pub percentages: Vec<f64>,

    pub total: f64,
}

/// Top-N-plus-"Other" composition of category totals across years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionMix {
    /// Top N names by lifetime total, followed by "Other"
    pub keys: Vec<SeriesKey>,

    /// One row per input year, in input order
    pub rows: Vec<CompositionRow>,
}

impl CompositionMix {
    /// Percentage of `key` in `year`, if both exist.
    pub fn share(&self, year: i32, key: &str) -> Option<f64> {
        let idx = self.keys.iter().position(|k| k.name == key)?;
        let row = self.rows.iter().find(|r| r.year == year)?;
        row.percentages.get(idx).copied()
    }

    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(|k| k.name.as_str()).collect()
    }
}
