use serde::{Deserialize, Serialize};

use super::analytics::{Attribution, Kpis, NetWorthProjection};
use super::chart::CompositionMix;
use super::heatmap::{CategoryYearHeatmap, SeasonalityHeatmap};
use super::ranking::{RankedTotal, YoyMover};
use super::window::{ReportMode, WindowPreset, WindowRange};
use super::yearly::{YearlyReportRow, YearlyTable};

/// Parameters of one dashboard derivation besides the snapshot itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub preset: WindowPreset,
    pub mode: ReportMode,

    /// Yearly-report feed; when present it overrides the snapshot's
    /// income/expense/net per year
    #[serde(default)]
    pub yearly_report: Option<Vec<YearlyReportRow>>,
}

/// Views of the "total" report mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalViews {
    pub net_worth: NetWorthProjection,

    /// `None` when the window holds fewer than two net-worth points
    pub attribution: Option<Attribution>,

    pub expense_mix: CompositionMix,
    pub income_mix: CompositionMix,

    pub top_expense_categories: Vec<RankedTotal>,
    pub top_income_sources: Vec<RankedTotal>,

    pub expense_movers: Vec<YoyMover>,
    pub income_movers: Vec<YoyMover>,
}

/// Views of the "yearly" report mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyViews {
    pub yearly: YearlyTable,
    pub seasonality: SeasonalityHeatmap,
    pub expense_categories: CategoryYearHeatmap,
    pub income_categories: CategoryYearHeatmap,
}

/// Everything the dashboard renders for one `(snapshot, request)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub preset: WindowPreset,
    pub mode: ReportMode,

    /// `None` when the snapshot has no years
    pub window: Option<WindowRange>,

    pub kpis: Kpis,

    pub total: Option<TotalViews>,
    pub yearly: Option<YearlyViews>,
}
