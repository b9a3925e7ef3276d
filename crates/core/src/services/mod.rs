pub mod attribution_service;
pub mod category_heatmap_service;
pub mod composition_service;
pub mod dashboard_service;
pub mod kpi_service;
pub mod net_worth_service;
pub mod ranking_service;
pub mod seasonality_service;
pub mod window_service;
pub mod yearly_service;

/// `part` as a percentage of `whole`; `None` when `whole` is zero.
pub(crate) fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    Some(part / whole * 100.0).filter(|v| v.is_finite())
}

/// Relative change from `from` to `to` in percent; `None` when `from` is zero.
///
/// Divides by `|from|` so a move towards positive is always a positive
/// percentage, also when starting below zero.
pub(crate) fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from.abs() * 100.0).filter(|v| v.is_finite())
}
