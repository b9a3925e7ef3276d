use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date;
use super::money;
use crate::errors::CoreError;

/// The report-overview snapshot: the single immutable input every
/// dashboard view is derived from.
///
/// Amounts arrive as decimal strings and are parsed to `f64` during
/// deserialization. `as_of`, `yearly`, `net_worth_series`,
/// `monthly_income_expense`, `debt` and `kpis` are required; every other
/// block may be missing and is then empty (or `None` for `investments`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalOverview {
    #[serde(with = "date::iso")]
    pub as_of: NaiveDate,

    pub yearly: Vec<YearlyTotals>,

    pub net_worth_series: Vec<NetWorthSample>,

    pub monthly_income_expense: Vec<MonthlyIncomeExpense>,

    pub debt: DebtOverview,

    /// `None` means the user tracks no investments, which is not the same
    /// as investments worth zero.
    #[serde(default)]
    pub investments: Option<InvestmentsOverview>,

    pub kpis: OverviewKpis,

    #[serde(default)]
    pub expense_category_mix_by_year: Vec<CategoryMixYear>,

    #[serde(default)]
    pub income_category_mix_by_year: Vec<CategoryMixYear>,

    #[serde(default)]
    pub expense_category_heatmap_by_year: CategoryHeatmap,

    #[serde(default)]
    pub income_category_heatmap_by_year: CategoryHeatmap,

    #[serde(default)]
    pub expense_categories_lifetime: Vec<LifetimeTotal>,

    #[serde(default)]
    pub income_sources_lifetime: Vec<LifetimeTotal>,

    #[serde(default)]
    pub expense_category_changes_yoy: Vec<YoyChange>,

    #[serde(default)]
    pub income_source_changes_yoy: Vec<YoyChange>,

    #[serde(default)]
    pub accounts: Vec<AccountBalance>,
}

impl TotalOverview {
    /// Parse a snapshot from the report endpoint's JSON body.
    ///
    /// A body that is valid JSON but misses a required field or carries a
    /// malformed required amount/date is reported as `InvalidSnapshot`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                CoreError::InvalidSnapshot(e.to_string())
            } else {
                CoreError::from(e)
            }
        })
    }

    /// Distinct years of the `yearly` block, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.yearly.iter().map(|y| y.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Income/expense totals for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotals {
    pub year: i32,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub income: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub expense: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub net: f64,

    /// `None` when the server suppressed the rate (no income that year)
    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub savings_rate_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSample {
    #[serde(with = "date::iso")]
    pub date: NaiveDate,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub net_worth: f64,
}

/// One month of cash flow. `date` is any day inside the month, usually the 1st.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncomeExpense {
    #[serde(with = "date::iso")]
    pub date: NaiveDate,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub income: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub expense: f64,
}

/// Liabilities block. Balances are positive numbers (amount owed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtOverview {
    #[serde(default)]
    pub series: Vec<DebtSample>,

    #[serde(default)]
    pub accounts: Vec<DebtAccount>,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub total_current: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSample {
    #[serde(with = "date::iso")]
    pub date: NaiveDate,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub debt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentsOverview {
    #[serde(default)]
    pub series: Vec<ValueSample>,

    #[serde(default)]
    pub yearly: Vec<InvestmentYear>,

    #[serde(default)]
    pub accounts_latest: Vec<InvestmentAccount>,
}

/// A dated market value (investment portfolio total).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSample {
    #[serde(with = "date::iso")]
    pub date: NaiveDate,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentYear {
    pub year: i32,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub end_value: Option<f64>,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub contributions: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAccount {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub value: f64,
}

/// Headline numbers as computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewKpis {
    #[serde(deserialize_with = "money::amount::deserialize")]
    pub net_worth: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub cash_total: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub debt_total: f64,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub investments_value: Option<f64>,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub lifetime_income: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub lifetime_expense: f64,

    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub lifetime_savings_rate_pct: Option<f64>,
}

/// Category totals for one year, as used by the composition mix cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMixYear {
    pub year: i32,

    /// Server-side year total; when absent the sum of `categories` is used
    #[serde(default, deserialize_with = "money::optional_amount::deserialize")]
    pub total: Option<f64>,

    #[serde(default)]
    pub categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(default)]
    pub category_id: Option<String>,

    pub name: String,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub total: f64,

    #[serde(default)]
    pub color_hex: Option<String>,
}

/// Category × year matrix as shaped by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryHeatmap {
    #[serde(default)]
    pub years: Vec<i32>,

    #[serde(default)]
    pub rows: Vec<CategoryHeatmapRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHeatmapRow {
    pub category_id: String,
    pub name: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    /// Aligned to `CategoryHeatmap::years`
    #[serde(deserialize_with = "money::amount_list::deserialize")]
    pub totals: Vec<f64>,
}

/// Lifetime total for one expense category or income source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifetimeTotal {
    #[serde(default)]
    pub category_id: Option<String>,

    pub name: String,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub total: f64,

    #[serde(default)]
    pub color_hex: Option<String>,
}

/// Change of one category between the previous and the current year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoyChange {
    #[serde(default)]
    pub category_id: Option<String>,

    pub name: String,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub previous: f64,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub current: f64,
}

impl YoyChange {
    pub fn delta(&self) -> f64 {
        self.current - self.previous
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub account_type: Option<String>,

    #[serde(deserialize_with = "money::amount::deserialize")]
    pub balance: f64,

    #[serde(default)]
    pub currency: Option<String>,
}
