use crate::models::chart::Flow;
use crate::models::dashboard::{Dashboard, DashboardRequest, TotalViews, YearlyViews};
use crate::models::heatmap::{
    CategoryYearCellDetail, CategoryYearHeatmap, SeasonalityCellDetail, SeasonalityHeatmap,
};
use crate::models::overview::TotalOverview;
use crate::models::settings::EngineSettings;
use crate::models::window::{ReportMode, WindowRange};
use crate::services::attribution_service::AttributionService;
use crate::services::category_heatmap_service::CategoryHeatmapService;
use crate::services::composition_service::CompositionService;
use crate::services::kpi_service::KpiService;
use crate::services::net_worth_service::NetWorthService;
use crate::services::ranking_service::RankingService;
use crate::services::seasonality_service::SeasonalityService;
use crate::services::window_service::WindowService;
use crate::services::yearly_service::YearlyService;

/// Wires every view service together for one snapshot and request.
///
/// Stateless: the same inputs always give an equal `Dashboard`. Caching
/// lives in [`crate::AnalyticsEngine`], not here.
pub struct DashboardService {
    window_service: WindowService,
    kpi_service: KpiService,
    net_worth_service: NetWorthService,
    attribution_service: AttributionService,
    composition_service: CompositionService,
    ranking_service: RankingService,
    yearly_service: YearlyService,
    seasonality_service: SeasonalityService,
    category_heatmap_service: CategoryHeatmapService,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            window_service: WindowService::new(),
            kpi_service: KpiService::new(),
            net_worth_service: NetWorthService::new(),
            attribution_service: AttributionService::new(),
            composition_service: CompositionService::new(),
            ranking_service: RankingService::new(),
            yearly_service: YearlyService::new(),
            seasonality_service: SeasonalityService::new(),
            category_heatmap_service: CategoryHeatmapService::new(),
        }
    }

    /// Derive the dashboard. KPIs and the window are always filled; the
    /// report mode decides whether the total or the yearly views are.
    pub fn derive(
        &self,
        snapshot: &TotalOverview,
        request: &DashboardRequest,
        settings: &EngineSettings,
    ) -> Dashboard {
        let window = self
            .window_service
            .resolve(&snapshot.years(), snapshot.as_of, request.preset);

        let kpis = self.kpi_service.compute(snapshot);

        let (total, yearly) = match request.mode {
            ReportMode::Total => {
                (Some(self.total_views(snapshot, window.as_ref(), settings)), None)
            }
            ReportMode::Yearly => {
                (None, Some(self.yearly_views(snapshot, request, window.as_ref())))
            }
        };

        log::debug!(
            "derived {} dashboard for preset {} (window {:?})",
            request.mode,
            request.preset,
            window
        );

        Dashboard {
            preset: request.preset,
            mode: request.mode,
            window,
            kpis,
            total,
            yearly,
        }
    }

    /// Metrics for a selected seasonality cell.
    pub fn seasonality_cell(
        &self,
        heatmap: &SeasonalityHeatmap,
        flow: Flow,
        year: i32,
        month: u32,
    ) -> Option<SeasonalityCellDetail> {
        self.seasonality_service.cell_detail(heatmap, flow, year, month)
    }

    /// Metrics for a selected category × year cell.
    pub fn category_cell(
        &self,
        heatmap: &CategoryYearHeatmap,
        row: usize,
        column: usize,
    ) -> Option<CategoryYearCellDetail> {
        self.category_heatmap_service.cell_detail(heatmap, row, column)
    }

    fn total_views(
        &self,
        snapshot: &TotalOverview,
        window: Option<&WindowRange>,
        settings: &EngineSettings,
    ) -> TotalViews {
        let net_worth = self
            .net_worth_service
            .project(&snapshot.net_worth_series, window);

        let attribution = self.attribution_service.decompose(
            &net_worth,
            window,
            &snapshot.monthly_income_expense,
            &snapshot.debt,
            snapshot.investments.as_ref(),
        );

        let expense_years = self
            .composition_service
            .last_years(&snapshot.expense_category_mix_by_year, settings.mix_years);
        let income_years = self
            .composition_service
            .last_years(&snapshot.income_category_mix_by_year, settings.mix_years);

        TotalViews {
            net_worth,
            attribution,
            expense_mix: self
                .composition_service
                .bucket(&expense_years, settings.top_n, Flow::Expense),
            income_mix: self
                .composition_service
                .bucket(&income_years, settings.top_n, Flow::Income),
            top_expense_categories: self
                .ranking_service
                .lifetime(&snapshot.expense_categories_lifetime, settings.ranking_limit),
            top_income_sources: self
                .ranking_service
                .lifetime(&snapshot.income_sources_lifetime, settings.ranking_limit),
            expense_movers: self
                .ranking_service
                .movers(&snapshot.expense_category_changes_yoy, settings.ranking_limit),
            income_movers: self
                .ranking_service
                .movers(&snapshot.income_source_changes_yoy, settings.ranking_limit),
        }
    }

    fn yearly_views(
        &self,
        snapshot: &TotalOverview,
        request: &DashboardRequest,
        window: Option<&WindowRange>,
    ) -> YearlyViews {
        YearlyViews {
            yearly: self.yearly_service.aggregate(
                &snapshot.yearly,
                request.yearly_report.as_deref(),
                window,
            ),
            seasonality: self
                .seasonality_service
                .build(&snapshot.monthly_income_expense, window),
            expense_categories: self
                .category_heatmap_service
                .slice(&snapshot.expense_category_heatmap_by_year, window),
            income_categories: self
                .category_heatmap_service
                .slice(&snapshot.income_category_heatmap_by_year, window),
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
