use crate::models::heatmap::{CategoryYearCellDetail, CategoryYearHeatmap, CategoryYearRow};
use crate::models::overview::CategoryHeatmap;
use crate::models::window::WindowRange;
use crate::services::percent_of;

/// Re-slices the server's category × year heatmap to the active window.
pub struct CategoryHeatmapService;

impl CategoryHeatmapService {
    pub fn new() -> Self {
        Self
    }

    /// Keep the year columns inside `window` (all columns when `None`),
    /// preserving each row's identity, and recompute `max` over the kept
    /// cells only. Cells missing from a short row read as zero.
    pub fn slice(&self, source: &CategoryHeatmap, window: Option<&WindowRange>) -> CategoryYearHeatmap {
        let columns: Vec<usize> = source
            .years
            .iter()
            .enumerate()
            .filter(|(_, year)| window.map_or(true, |w| w.contains_year(**year)))
            .map(|(idx, _)| idx)
            .collect();

        let years: Vec<i32> = columns.iter().map(|&idx| source.years[idx]).collect();

        let rows: Vec<CategoryYearRow> = source
            .rows
            .iter()
            .map(|row| CategoryYearRow {
                category_id: row.category_id.clone(),
                name: row.name.clone(),
                icon: row.icon.clone(),
                color: row.color.clone(),
                totals: columns
                    .iter()
                    .map(|&idx| row.totals.get(idx).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        let max = rows
            .iter()
            .flat_map(|row| row.totals.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));

        CategoryYearHeatmap { years, rows, max }
    }

    /// Metrics for the cell at `(row, column)` of a sliced heatmap.
    ///
    /// The YoY delta compares against the column immediately to the left,
    /// i.e. the previous *visible* year, even if calendar years in between
    /// were filtered out. The leftmost column has no delta.
    pub fn cell_detail(
        &self,
        heatmap: &CategoryYearHeatmap,
        row: usize,
        column: usize,
    ) -> Option<CategoryYearCellDetail> {
        let cat = heatmap.rows.get(row)?;
        let year = *heatmap.years.get(column)?;
        let value = cat.totals.get(column).copied().unwrap_or(0.0);

        let previous = column
            .checked_sub(1)
            .map(|prev| (heatmap.years[prev], cat.totals.get(prev).copied().unwrap_or(0.0)));

        let column_total: f64 = heatmap
            .rows
            .iter()
            .map(|r| r.totals.get(column).copied().unwrap_or(0.0))
            .sum();

        Some(CategoryYearCellDetail {
            category_id: cat.category_id.clone(),
            year,
            value,
            previous_year: previous.map(|(y, _)| y),
            yoy_delta: previous.map(|(_, v)| value - v),
            column_share_pct: percent_of(value, column_total),
        })
    }
}

impl Default for CategoryHeatmapService {
    fn default() -> Self {
        Self::new()
    }
}
