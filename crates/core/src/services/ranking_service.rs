use crate::models::overview::{LifetimeTotal, YoyChange};
use crate::models::ranking::{RankedTotal, YoyMover};
use crate::services::{percent_change, percent_of};

/// Leaderboards over the snapshot's lifetime totals and year-over-year changes.
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    /// Largest lifetime totals first (by absolute value), at most `limit`
    /// entries. Shares are relative to the sum over all entries, not just
    /// the listed ones. Equal totals keep their source order.
    pub fn lifetime(&self, entries: &[LifetimeTotal], limit: usize) -> Vec<RankedTotal> {
        let grand_total: f64 = entries.iter().map(|e| e.total.abs()).sum();

        let mut sorted: Vec<&LifetimeTotal> = entries.iter().collect();
        sorted.sort_by(|a, b| b.total.abs().total_cmp(&a.total.abs()));

        sorted
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, e)| RankedTotal {
                rank: i + 1,
                category_id: e.category_id.clone(),
                name: e.name.clone(),
                total: e.total,
                share_pct: percent_of(e.total.abs(), grand_total),
                color_hex: e.color_hex.clone(),
            })
            .collect()
    }

    /// Biggest movers first, by absolute change. Unchanged entries are left out.
    pub fn movers(&self, changes: &[YoyChange], limit: usize) -> Vec<YoyMover> {
        let mut moved: Vec<&YoyChange> = changes.iter().filter(|c| c.delta() != 0.0).collect();
        moved.sort_by(|a, b| b.delta().abs().total_cmp(&a.delta().abs()));

        moved
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, c)| YoyMover {
                rank: i + 1,
                category_id: c.category_id.clone(),
                name: c.name.clone(),
                previous: c.previous,
                current: c.current,
                delta: c.delta(),
                delta_pct: percent_change(c.previous, c.current),
            })
            .collect()
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}
