use std::collections::BTreeMap;

use crate::models::overview::YearlyTotals;
use crate::models::window::WindowRange;
use crate::models::yearly::{YearRow, YearlyReportRow, YearlyTable};

/// Produces the per-year rows of the yearly chart and table.
pub struct YearlyService;

impl YearlyService {
    pub fn new() -> Self {
        Self
    }

    /// Merge the snapshot's yearly rows with the optional yearly-report feed.
    ///
    /// Where the feed has a year, its income/expense/net and adjustment
    /// flows win; the savings rate always comes from the snapshot (years
    /// only the feed knows get `None`). Years outside `window` are dropped.
    pub fn aggregate(
        &self,
        yearly: &[YearlyTotals],
        report: Option<&[YearlyReportRow]>,
        window: Option<&WindowRange>,
    ) -> YearlyTable {
        let mut by_year: BTreeMap<i32, YearRow> = BTreeMap::new();

        for row in yearly {
            by_year.insert(
                row.year,
                YearRow {
                    year: row.year,
                    income: row.income,
                    expense: row.expense,
                    net: row.net,
                    savings_rate_pct: row.savings_rate_pct,
                    adjustment_inflow: None,
                    adjustment_outflow: None,
                    adjustment_net: None,
                },
            );
        }

        for feed in report.unwrap_or_default() {
            let entry = by_year.entry(feed.year).or_insert(YearRow {
                year: feed.year,
                income: 0.0,
                expense: 0.0,
                net: 0.0,
                savings_rate_pct: None,
                adjustment_inflow: None,
                adjustment_outflow: None,
                adjustment_net: None,
            });
            entry.income = feed.income;
            entry.expense = feed.expense;
            entry.net = feed.net;
            entry.adjustment_inflow = feed.adjustment_inflow;
            entry.adjustment_outflow = feed.adjustment_outflow;
            entry.adjustment_net = feed.adjustment_net;
        }

        let chart_data: Vec<YearRow> = by_year
            .into_values()
            .filter(|row| window.map_or(true, |w| w.contains_year(row.year)))
            .collect();
        let mut table_data = chart_data.clone();
        table_data.reverse();

        YearlyTable {
            chart_data,
            table_data,
        }
    }
}

impl Default for YearlyService {
    fn default() -> Self {
        Self::new()
    }
}
