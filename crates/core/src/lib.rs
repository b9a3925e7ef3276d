pub mod errors;
pub mod models;
pub mod services;

use models::{
    chart::Flow,
    dashboard::{Dashboard, DashboardRequest},
    heatmap::{CategoryYearCellDetail, CategoryYearHeatmap, SeasonalityCellDetail, SeasonalityHeatmap},
    overview::TotalOverview,
    settings::EngineSettings,
    window::{ReportMode, WindowPreset},
};
use serde::Serialize;
use services::dashboard_service::DashboardService;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use errors::CoreError;

/// Derive every dashboard view for `snapshot` and `request`.
///
/// Pure and cache-agnostic; [`AnalyticsEngine`] memoizes calls to it.
pub fn derive_dashboard(
    snapshot: &TotalOverview,
    request: &DashboardRequest,
    settings: &EngineSettings,
) -> Dashboard {
    DashboardService::new().derive(snapshot, request, settings)
}

/// Structural fingerprint of any serializable input: a 64-bit hash of its
/// bincode encoding. Equal values always share a fingerprint.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<u64, CoreError> {
    let bytes = bincode::serialize(value)?;
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    Ok(hasher.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    snapshot: u64,
    preset: WindowPreset,
    mode: ReportMode,
    yearly_report: Option<u64>,
}

/// Main entry point for the analytics core.
///
/// Holds the settings, the view services and a small memo table so that
/// re-rendering with an unchanged snapshot and preset reuses the previous
/// dashboard instead of recomputing it.
#[must_use]
pub struct AnalyticsEngine {
    settings: EngineSettings,
    dashboard_service: DashboardService,
    memo: HashMap<MemoKey, Arc<Dashboard>>,
}

impl std::fmt::Debug for AnalyticsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsEngine")
            .field("settings", &self.settings)
            .field("memoized", &self.memo.len())
            .finish()
    }
}

impl AnalyticsEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::build(EngineSettings::default())
    }

    /// Create an engine with custom settings. Settings are validated.
    pub fn with_settings(settings: EngineSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    // ── Dashboards ──────────────────────────────────────────────────

    /// Dashboard for `snapshot` and `request`, reusing a memoized result
    /// when an equal snapshot and request were derived before.
    ///
    /// Fails only if the inputs cannot be fingerprinted.
    pub fn dashboard(
        &mut self,
        snapshot: &TotalOverview,
        request: &DashboardRequest,
    ) -> Result<Arc<Dashboard>, CoreError> {
        let key = MemoKey {
            snapshot: fingerprint(snapshot)?,
            preset: request.preset,
            mode: request.mode,
            yearly_report: request
                .yearly_report
                .as_deref()
                .map(|rows| fingerprint(rows))
                .transpose()?,
        };

        if let Some(hit) = self.memo.get(&key) {
            log::debug!("dashboard memo hit ({} {})", key.mode, key.preset);
            return Ok(Arc::clone(hit));
        }

        let dashboard = Arc::new(self.dashboard_service.derive(snapshot, request, &self.settings));

        if self.memo.len() >= self.settings.memo_capacity {
            self.memo.clear();
        }
        self.memo.insert(key, Arc::clone(&dashboard));
        Ok(dashboard)
    }

    /// Parse the report endpoint's JSON body and derive its dashboard.
    /// `preset` and `mode` use their wire spelling (`"all"`, `"5"`, `"total"`, ...).
    pub fn dashboard_from_json(
        &mut self,
        json: &str,
        preset: &str,
        mode: &str,
    ) -> Result<Arc<Dashboard>, CoreError> {
        let snapshot = TotalOverview::from_json(json)?;
        let request = DashboardRequest {
            preset: preset.parse()?,
            mode: mode.parse()?,
            yearly_report: None,
        };
        self.dashboard(&snapshot, &request)
    }

    /// Request for `mode` using the configured default preset.
    #[must_use]
    pub fn default_request(&self, mode: ReportMode) -> DashboardRequest {
        DashboardRequest {
            preset: self.settings.default_preset,
            mode,
            yearly_report: None,
        }
    }

    // ── Cell selection ──────────────────────────────────────────────

    /// Metrics for a selected seasonality cell (rank, share, YoY delta).
    #[must_use]
    pub fn seasonality_cell(
        &self,
        heatmap: &SeasonalityHeatmap,
        flow: Flow,
        year: i32,
        month: u32,
    ) -> Option<SeasonalityCellDetail> {
        self.dashboard_service.seasonality_cell(heatmap, flow, year, month)
    }

    /// Metrics for a selected category × year cell.
    #[must_use]
    pub fn category_cell(
        &self,
        heatmap: &CategoryYearHeatmap,
        row: usize,
        column: usize,
    ) -> Option<CategoryYearCellDetail> {
        self.dashboard_service.category_cell(heatmap, row, column)
    }

    // ── Settings & memo ─────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Number of memoized dashboards.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: EngineSettings) -> Self {
        Self {
            settings,
            dashboard_service: DashboardService::new(),
            memo: HashMap::new(),
        }
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
