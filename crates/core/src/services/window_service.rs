use chrono::{Datelike, NaiveDate};

use crate::models::window::{WindowPreset, WindowRange};

/// Resolves a window preset to a concrete date range.
///
/// Pure business logic — no I/O.
pub struct WindowService;

impl WindowService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `preset` against the snapshot's years and `as_of` date.
    ///
    /// The range always ends at `as_of`. It starts on January 1st of the
    /// first data year for `All`, and of `as_of.year() - N + 1` for an
    /// N-year preset, but never before the first data year: asking for ten
    /// years of a four-year history gives the same range as `All`.
    ///
    /// Returns `None` when there are no years.
    pub fn resolve(
        &self,
        years: &[i32],
        as_of: NaiveDate,
        preset: WindowPreset,
    ) -> Option<WindowRange> {
        let min_year = years.iter().copied().min()?;

        let start_year = match preset.years() {
            None => min_year,
            Some(n) => min_year.max(as_of.year() - n + 1),
        };
        // A window can't start after it ends, even if the years lie in the future
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1)?.min(as_of);

        Some(WindowRange { start, end: as_of })
    }
}

impl Default for WindowService {
    fn default() -> Self {
        Self::new()
    }
}
