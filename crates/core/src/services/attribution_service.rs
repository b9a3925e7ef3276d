use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::analytics::{Attribution, NetWorthProjection};
use crate::models::overview::{DebtOverview, InvestmentsOverview, MonthlyIncomeExpense};
use crate::models::money::to_decimal;
use crate::models::window::WindowRange;

/// Splits the net-worth change over the window into savings, debt paydown,
/// investment growth and an explicit unexplained remainder.
pub struct AttributionService;

impl AttributionService {
    pub fn new() -> Self {
        Self
    }

    /// Decompose the change between the first and the last projected point.
    ///
    /// - savings: income minus expense of the monthly rows dated inside the
    ///   window (the projected point range when `window` is `None`)
    /// - debt: the negated change of the debt balance between the two point
    ///   dates
    /// - investments: the change of the investment value between the two
    ///   point dates, `None` without an investment series
    ///
    /// Returns `None` when the projection holds fewer than two points.
    pub fn decompose(
        &self,
        projection: &NetWorthProjection,
        window: Option<&WindowRange>,
        monthly: &[MonthlyIncomeExpense],
        debt: &DebtOverview,
        investments: Option<&InvestmentsOverview>,
    ) -> Option<Attribution> {
        if projection.points.len() < 2 {
            return None;
        }
        let start = projection.first.as_ref()?;
        let end = projection.current.as_ref()?;

        let range = window.copied().unwrap_or(WindowRange {
            start: start.date,
            end: end.date,
        });

        let savings: Decimal = monthly
            .iter()
            .filter(|row| range.contains(row.date))
            .map(|row| to_decimal(row.income) - to_decimal(row.expense))
            .sum();

        let debt_points: Vec<(NaiveDate, f64)> =
            debt.series.iter().map(|s| (s.date, s.debt)).collect();
        let debt_contribution =
            value_as_of(&debt_points, start.date) - value_as_of(&debt_points, end.date);

        let investments_contribution = investments
            .filter(|inv| !inv.series.is_empty())
            .map(|inv| {
                let points: Vec<(NaiveDate, f64)> =
                    inv.series.iter().map(|s| (s.date, s.value)).collect();
                value_as_of(&points, end.date) - value_as_of(&points, start.date)
            });

        let net_worth_start = to_decimal(start.net_worth);
        let net_worth_end = to_decimal(end.net_worth);
        let net_worth_delta = net_worth_end - net_worth_start;
        let explained = savings + debt_contribution + investments_contribution.unwrap_or_default();

        log::debug!(
            "attribution {}..{}: delta={net_worth_delta} explained={explained}",
            start.date,
            end.date
        );

        Some(Attribution {
            start_date: start.date,
            end_date: end.date,
            net_worth_start,
            net_worth_end,
            net_worth_delta,
            savings,
            debt_contribution,
            investments_contribution,
            explained,
            remainder: net_worth_delta - explained,
        })
    }
}

impl Default for AttributionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance in effect on `date`: the newest sample dated on or before it.
/// Before the first sample nothing was recorded, which counts as zero.
fn value_as_of(points: &[(NaiveDate, f64)], date: NaiveDate) -> Decimal {
    let mut best: Option<(NaiveDate, f64)> = None;
    for &(d, v) in points {
        // `>=` so the last of several same-day samples wins
        if d <= date && best.map_or(true, |(bd, _)| d >= bd) {
            best = Some((d, v));
        }
    }
    best.map_or(Decimal::ZERO, |(_, v)| to_decimal(v))
}
