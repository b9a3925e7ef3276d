use crate::models::analytics::Kpis;
use crate::models::overview::TotalOverview;

/// Maps the snapshot's server-side KPIs to the headline strip.
pub struct KpiService;

impl KpiService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, snapshot: &TotalOverview) -> Kpis {
        let src = &snapshot.kpis;
        let investments_value = src.investments_value;

        Kpis {
            net_worth: src.net_worth,
            cash: src.cash_total,
            debt: src.debt_total,
            investments_value,
            total_money: src.cash_total + investments_value.unwrap_or(0.0) - src.debt_total,
            lifetime_income: src.lifetime_income,
            lifetime_expense: src.lifetime_expense,
            lifetime_savings: src.lifetime_income - src.lifetime_expense,
            lifetime_savings_rate_pct: src.lifetime_savings_rate_pct,
        }
    }
}

impl Default for KpiService {
    fn default() -> Self {
        Self::new()
    }
}
