use serde::{Deserialize, Serialize};

/// A category or income source in a lifetime leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTotal {
    /// 1-based
    pub rank: usize,
    pub category_id: Option<String>,
    pub name: String,
    pub total: f64,

    /// Share of the sum of all listed totals
    pub share_pct: Option<f64>,

    pub color_hex: Option<String>,
}

/// A category whose total moved between the previous and the current year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoyMover {
    pub rank: usize,
    pub category_id: Option<String>,
    pub name: String,
    pub previous: f64,
    pub current: f64,
    pub delta: f64,

    /// `None` when the previous year was zero
    pub delta_pct: Option<f64>,
}
