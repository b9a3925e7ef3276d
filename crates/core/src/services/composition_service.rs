use std::collections::HashMap;

use crate::models::chart::{CompositionMix, CompositionRow, Flow, SeriesKey, OTHER_COLOR, OTHER_KEY};
use crate::models::overview::CategoryMixYear;

/// Fallback colors by rank when a category never carries its own color.
static EXPENSE_PALETTE: [&str; 10] = [
    "#ef4444", "#f97316", "#f59e0b", "#ec4899", "#a855f7", "#e11d48", "#d97706", "#c026d3",
    "#fb7185", "#b91c1c",
];
static INCOME_PALETTE: [&str; 10] = [
    "#10b981", "#3b82f6", "#14b8a6", "#6366f1", "#22c55e", "#0ea5e9", "#84cc16", "#8b5cf6",
    "#06b6d4", "#15803d",
];

/// Collapses per-year category totals into a fixed top-N-plus-"Other" set
/// of percentage series for stacked composition charts.
pub struct CompositionService;

impl CompositionService {
    pub fn new() -> Self {
        Self
    }

    /// Build the composition mix.
    ///
    /// 1. Rank category names by their absolute total summed over all
    ///    years. A source category named "Other" is never ranked; its amount
    ///    ends up in the derived "Other" bucket.
    /// 2. Keep the top `top_n` names (ties keep first-appearance order) and
    ///    append "Other".
    /// 3. Per year, each key gets its absolute total for that year and
    ///    "Other" gets whatever is left of the year total, floored at zero.
    /// 4. Amounts become percentages of the year; a zero year is all zeros.
    pub fn bucket(&self, years: &[CategoryMixYear], top_n: usize, flow: Flow) -> CompositionMix {
        let names = rank_names(years);
        let top: Vec<&str> = names.iter().take(top_n).map(|(name, _)| *name).collect();

        let colors = self.color_table(years);
        let palette = palette_for(flow);
        let mut keys: Vec<SeriesKey> = top
            .iter()
            .enumerate()
            .map(|(rank, name)| SeriesKey {
                name: name.to_string(),
                color: colors
                    .get(*name)
                    .cloned()
                    .unwrap_or_else(|| palette[rank % palette.len()].to_string()),
            })
            .collect();
        keys.push(SeriesKey {
            name: OTHER_KEY.to_string(),
            color: OTHER_COLOR.to_string(),
        });

        let rows = years.iter().map(|year| bucket_year(year, &top)).collect();

        log::debug!(
            "{flow} composition: {} categories collapsed into {} keys over {} years",
            names.len(),
            keys.len(),
            years.len()
        );

        CompositionMix { keys, rows }
    }

    /// Color of every category name that carries one: the color from the
    /// most recent year that has it.
    pub fn color_table(&self, years: &[CategoryMixYear]) -> HashMap<String, String> {
        let mut newest_first: Vec<&CategoryMixYear> = years.iter().collect();
        newest_first.sort_by(|a, b| b.year.cmp(&a.year));

        let mut table = HashMap::new();
        for year in newest_first {
            for cat in &year.categories {
                let Some(color) = cat.color_hex.as_deref().map(str::trim) else {
                    continue;
                };
                if color.is_empty() {
                    continue;
                }
                table
                    .entry(cat.name.clone())
                    .or_insert_with(|| color.to_string());
            }
        }
        table
    }

    /// The `n` most recent years, oldest first.
    pub fn last_years(&self, years: &[CategoryMixYear], n: usize) -> Vec<CategoryMixYear> {
        let mut sorted: Vec<CategoryMixYear> = years.to_vec();
        sorted.sort_by_key(|y| y.year);
        let skip = sorted.len().saturating_sub(n);
        sorted.split_off(skip)
    }
}

impl Default for CompositionService {
    fn default() -> Self {
        Self::new()
    }
}

fn palette_for(flow: Flow) -> &'static [&'static str] {
    match flow {
        Flow::Expense => &EXPENSE_PALETTE,
        Flow::Income => &INCOME_PALETTE,
    }
}

/// Category names with their lifetime absolute totals, largest first.
fn rank_names(years: &[CategoryMixYear]) -> Vec<(&str, f64)> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for year in years {
        for cat in &year.categories {
            if cat.name == OTHER_KEY {
                continue;
            }
            let idx = *index.entry(cat.name.as_str()).or_insert_with(|| {
                totals.push((cat.name.as_str(), 0.0));
                totals.len() - 1
            });
            totals[idx].1 += cat.total.abs();
        }
    }

    // sort_by is stable, so equal totals keep first-appearance order
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

fn bucket_year(year: &CategoryMixYear, top: &[&str]) -> CompositionRow {
    let mut amounts: Vec<f64> = top
        .iter()
        .map(|name| {
            year.categories
                .iter()
                .filter(|c| c.name == *name)
                .map(|c| c.total.abs())
                .sum()
        })
        .collect();

    let top_sum: f64 = amounts.iter().sum();
    let year_total = year
        .total
        .map(f64::abs)
        .unwrap_or_else(|| year.categories.iter().map(|c| c.total.abs()).sum());
    amounts.push((year_total - top_sum).max(0.0));

    // Categories may add up to slightly more than a rounded year total
    let denominator = year_total.max(top_sum);
    let percentages = if year_total > 0.0 {
        amounts.iter().map(|a| a / denominator * 100.0).collect()
    } else {
        vec![0.0; amounts.len()]
    };

    CompositionRow {
        year: year.year,
        amounts,
        percentages,
        total: year_total,
    }
}
