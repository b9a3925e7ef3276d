use chrono::Datelike;

use crate::models::chart::Flow;
use crate::models::heatmap::{MonthCell, MonthMatrix, SeasonalityCellDetail, SeasonalityHeatmap};
use crate::models::overview::MonthlyIncomeExpense;
use crate::models::window::WindowRange;
use crate::services::percent_of;

/// Builds year × month income/expense matrices and the metrics shown when
/// a cell is selected.
pub struct SeasonalityService;

impl SeasonalityService {
    pub fn new() -> Self {
        Self
    }

    /// Matrices for the monthly rows whose year lies inside `window`
    /// (every row when `window` is `None`).
    pub fn build(
        &self,
        monthly: &[MonthlyIncomeExpense],
        window: Option<&WindowRange>,
    ) -> SeasonalityHeatmap {
        let cells: Vec<MonthCell> = monthly
            .iter()
            .filter(|row| window.map_or(true, |w| w.contains_year(row.date.year())))
            .map(|row| MonthCell {
                year: row.date.year(),
                month: row.date.month(),
                income: row.income,
                expense: row.expense,
            })
            .collect();
        self.build_from_cells(&cells)
    }

    /// Scatter month buckets into the matrices, summing cells that share a
    /// `(year, month)`. Buckets with a month outside 1..=12 are skipped.
    pub fn build_from_cells(&self, cells: &[MonthCell]) -> SeasonalityHeatmap {
        let mut years: Vec<i32> = cells.iter().map(|c| c.year).collect();
        years.sort_unstable();
        years.dedup();

        let mut income = vec![[0.0_f64; 12]; years.len()];
        let mut expense = vec![[0.0_f64; 12]; years.len()];

        for cell in cells {
            if !(1..=12).contains(&cell.month) {
                log::warn!(
                    "skipping month {} of {}: outside 1..=12",
                    cell.month,
                    cell.year
                );
                continue;
            }
            // years holds every cell year, so the search always succeeds
            let Ok(row) = years.binary_search(&cell.year) else {
                continue;
            };
            let m = (cell.month - 1) as usize;
            income[row][m] += cell.income;
            expense[row][m] += cell.expense;
        }

        SeasonalityHeatmap {
            years,
            income: into_matrix(income),
            expense: into_matrix(expense),
        }
    }

    /// Rank, share of year, and change against the same month one year
    /// earlier, for the selected cell. `None` if the year is not in the
    /// matrix or the month is outside 1..=12.
    pub fn cell_detail(
        &self,
        heatmap: &SeasonalityHeatmap,
        flow: Flow,
        year: i32,
        month: u32,
    ) -> Option<SeasonalityCellDetail> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let matrix = match flow {
            Flow::Income => &heatmap.income,
            Flow::Expense => &heatmap.expense,
        };
        let row_idx = heatmap.years.iter().position(|y| *y == year)?;
        let row = matrix.cells.get(row_idx)?;
        let m = (month - 1) as usize;
        let value = row[m];

        let month_rank = 1 + row.iter().filter(|v| **v > value).count();
        let year_total: f64 = row.iter().sum();

        let yoy_delta = heatmap
            .years
            .iter()
            .position(|y| *y == year - 1)
            .and_then(|prior_idx| matrix.cells.get(prior_idx))
            .map(|prior| value - prior[m]);

        Some(SeasonalityCellDetail {
            year,
            month,
            value,
            month_rank,
            month_share_pct: percent_of(value, year_total),
            yoy_delta,
        })
    }
}

impl Default for SeasonalityService {
    fn default() -> Self {
        Self::new()
    }
}

fn into_matrix(cells: Vec<[f64; 12]>) -> MonthMatrix {
    let max = cells
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    MonthMatrix { cells, max }
}
