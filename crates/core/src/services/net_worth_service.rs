use chrono::Months;

use crate::models::analytics::{NetWorthPoint, NetWorthProjection};
use crate::models::overview::NetWorthSample;
use crate::models::window::WindowRange;
use crate::services::percent_change;

/// Projects the raw net-worth series onto the active window and derives
/// its summary statistics.
pub struct NetWorthService;

impl NetWorthService {
    pub fn new() -> Self {
        Self
    }

    /// Keep the samples dated on or after `window.start` (all samples when
    /// there is no window), ordered by date, and compute first/current,
    /// all-time high/low, the 12-month change and the change since the
    /// window start.
    ///
    /// The window end is not applied: the series never extends past `as_of`.
    pub fn project(
        &self,
        series: &[NetWorthSample],
        window: Option<&WindowRange>,
    ) -> NetWorthProjection {
        let mut samples: Vec<&NetWorthSample> = series
            .iter()
            .filter(|s| window.map_or(true, |w| s.date >= w.start))
            .collect();
        // Stable: samples sharing a date keep their source order
        samples.sort_by_key(|s| s.date);

        let points: Vec<NetWorthPoint> = samples
            .into_iter()
            .map(|s| NetWorthPoint {
                date: s.date,
                label: s.date.format("%b %Y").to_string(),
                net_worth: s.net_worth,
            })
            .collect();

        let (Some(first), Some(current)) = (points.first(), points.last()) else {
            return NetWorthProjection::default();
        };

        // Strict comparisons keep the earliest point on ties
        let mut high = first;
        let mut low = first;
        for point in &points[1..] {
            if point.net_worth > high.net_worth {
                high = point;
            }
            if point.net_worth < low.net_worth {
                low = point;
            }
        }

        let year_ago = current
            .date
            .checked_sub_months(Months::new(12))
            .and_then(|cutoff| points.iter().rev().find(|p| p.date <= cutoff));

        NetWorthProjection {
            first: Some(first.clone()),
            current: Some(current.clone()),
            all_time_high: Some(high.clone()),
            all_time_low: Some(low.clone()),
            year_ago: year_ago.cloned(),
            change_12m: year_ago.map(|p| current.net_worth - p.net_worth),
            change_12m_pct: year_ago.and_then(|p| percent_change(p.net_worth, current.net_worth)),
            change_since_start: Some(current.net_worth - first.net_worth),
            change_since_start_pct: percent_change(first.net_worth, current.net_worth),
            points,
        }
    }
}

impl Default for NetWorthService {
    fn default() -> Self {
        Self::new()
    }
}
