use serde::{Deserialize, Serialize};

/// A `years × 12` grid for one flow. `cells[i][m]` is month `m + 1` of `years[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthMatrix {
    pub cells: Vec<[f64; 12]>,

    /// Largest absolute cell value, for color intensity
    pub max: f64,
}

impl MonthMatrix {
    /// Sum of each year's twelve months, aligned to the rows.
    pub fn year_totals(&self) -> Vec<f64> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }
}

/// Year × month matrices of income and expense over the active window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityHeatmap {
    /// Ascending
    pub years: Vec<i32>,
    pub income: MonthMatrix,
    pub expense: MonthMatrix,
}

/// One month bucket fed to the seasonality builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    pub year: i32,

    /// 1-based; values outside 1..=12 are skipped
    pub month: u32,

    pub income: f64,
    pub expense: f64,
}

/// Metrics shown when a seasonality cell is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityCellDetail {
    pub year: i32,
    pub month: u32,
    pub value: f64,

    /// 1 = highest month of that year
    pub month_rank: usize,

    pub month_share_pct: Option<f64>,

    /// Difference to the same month of the prior year in the matrix
    pub yoy_delta: Option<f64>,
}

/// Category × year matrix restricted to the active window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearHeatmap {
    pub years: Vec<i32>,
    pub rows: Vec<CategoryYearRow>,

    /// Largest absolute cell value of the sliced matrix
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearRow {
    pub category_id: String,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,

    /// Aligned to [`CategoryYearHeatmap::years`]
    pub totals: Vec<f64>,
}

/// Metrics shown when a category × year cell is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearCellDetail {
    pub category_id: String,
    pub year: i32,
    pub value: f64,

    /// The visible column immediately to the left, if any
    pub previous_year: Option<i32>,

    pub yoy_delta: Option<f64>,

    /// Share of all categories in the same year
    pub column_share_pct: Option<f64>,
}
