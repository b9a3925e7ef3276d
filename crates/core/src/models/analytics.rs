use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline numbers shown in the KPI strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub net_worth: f64,

    pub cash: f64,

    /// Outstanding debt as a positive number
    pub debt: f64,

    /// `None` when the snapshot carries no investment value at all
    pub investments_value: Option<f64>,

    /// cash + investments - debt, with absent investments counting as nothing held
    pub total_money: f64,

    pub lifetime_income: f64,

    pub lifetime_expense: f64,

    pub lifetime_savings: f64,

    /// `None` when the server suppressed the rate, never defaulted to 0
    pub lifetime_savings_rate_pct: Option<f64>,
}

/// A net-worth sample inside the active window, ready for a line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    pub date: NaiveDate,

    /// Axis label, e.g. "Jan 2024"
    pub label: String,

    pub net_worth: f64,
}

/// Net-worth trajectory over the window plus its summary statistics.
///
/// Every statistic is `None` when the window holds no points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetWorthProjection {
    pub points: Vec<NetWorthPoint>,

    pub first: Option<NetWorthPoint>,

    /// Latest point in the window
    pub current: Option<NetWorthPoint>,

    /// Highest value; the earliest such point on ties
    pub all_time_high: Option<NetWorthPoint>,

    /// Lowest value; the earliest such point on ties
    pub all_time_low: Option<NetWorthPoint>,

    /// Newest point at least one calendar year older than `current`
    pub year_ago: Option<NetWorthPoint>,

    pub change_12m: Option<f64>,

    pub change_12m_pct: Option<f64>,

    pub change_since_start: Option<f64>,

    pub change_since_start_pct: Option<f64>,
}

/// Decomposition of the net-worth change over the window.
///
/// Amounts are exact decimals, so
/// `savings + debt_contribution + investments_contribution.unwrap_or_default()
/// + remainder == net_worth_delta` holds without tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub net_worth_start: Decimal,
    pub net_worth_end: Decimal,
    pub net_worth_delta: Decimal,

    /// Sum of income minus expense over the months inside the window
    pub savings: Decimal,

    /// Debt paid down (positive) or taken on (negative)
    pub debt_contribution: Decimal,

    /// Change in investment value, `None` when no investments are tracked
    pub investments_contribution: Option<Decimal>,

    pub explained: Decimal,

    /// Valuation changes, transfers and data gaps the named parts miss
    pub remainder: Decimal,
}

/// Named slice of an [`Attribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionKind {
    Savings,
    Debt,
    Investments,
    Unexplained,
}

impl std::fmt::Display for AttributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributionKind::Savings => write!(f, "Savings"),
            AttributionKind::Debt => write!(f, "Debt"),
            AttributionKind::Investments => write!(f, "Investments"),
            AttributionKind::Unexplained => write!(f, "Unexplained"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionBucket {
    pub kind: AttributionKind,
    pub amount: Option<Decimal>,
}

impl Attribution {
    /// The four buckets in display order. The residual is always included
    /// so it is rendered as its own bar instead of folding into another.
    pub fn buckets(&self) -> Vec<AttributionBucket> {
        vec![
            AttributionBucket {
                kind: AttributionKind::Savings,
                amount: Some(self.savings),
            },
            AttributionBucket {
                kind: AttributionKind::Debt,
                amount: Some(self.debt_contribution),
            },
            AttributionBucket {
                kind: AttributionKind::Investments,
                amount: self.investments_contribution,
            },
            AttributionBucket {
                kind: AttributionKind::Unexplained,
                amount: Some(self.remainder),
            },
        ]
    }
}
