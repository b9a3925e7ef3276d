use serde::{Deserialize, Serialize};

use super::money;

/// Row of the separate yearly-report feed, which also carries adjustment
/// flows (balance corrections booked outside income/expense).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReportRow {
    pub year: i32,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub income: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub expense: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub net: f64,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub adjustment_inflow: Option<f64>,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub adjustment_outflow: Option<f64>,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub adjustment_net: Option<f64>,
}

/// One row of the yearly chart / table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    pub income: f64,
    pub expense: f64,
    pub net: f64,

    /// Always the snapshot's own value
    pub savings_rate_pct: Option<f64>,

    pub adjustment_inflow: Option<f64>,
    pub adjustment_outflow: Option<f64>,
    pub adjustment_net: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyTable {
    /// Oldest year first
    pub chart_data: Vec<YearRow>,

    /// Newest year first
    pub table_data: Vec<YearRow>,
}
