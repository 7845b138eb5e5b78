//! Composite read path assembling the full analytics bundle.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use finsight_domain::{
    Account, Asset, AssetSlice, ExpenseSlice, FinancialGoal, FinancialHealthScore,
    FinancialInsight, FinancialSummary, GoalFeasibility, Liability, MonthlyFlow, NetWorthPoint,
    SpendingAnomaly, Transaction,
};

use crate::{
    anomaly, goals, health, insights, materializer::RecurrenceMaterializer, store::RecordStore,
    summary, CoreError,
};

/// Tuning knobs for the composite read path.
#[derive(Debug, Clone, Copy)]
pub struct OverviewOptions {
    pub anomaly_threshold: f64,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            anomaly_threshold: anomaly::DEFAULT_ANOMALY_THRESHOLD,
        }
    }
}

/// The caller's raw records plus every derived view, as one bundle.
#[derive(Debug, Clone, Serialize)]
pub struct FinanceOverview {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
    pub goals: Vec<FinancialGoal>,
    pub summary: FinancialSummary,
    pub expense_breakdown: Vec<ExpenseSlice>,
    pub asset_allocation: Vec<AssetSlice>,
    pub income_vs_expense: Vec<MonthlyFlow>,
    pub net_worth_trend: Vec<NetWorthPoint>,
    pub health_score: FinancialHealthScore,
    pub anomalies: Vec<SpendingAnomaly>,
    pub goal_feasibilities: Vec<GoalFeasibility>,
    pub insights: Vec<FinancialInsight>,
}

/// Materializes recurring obligations, refetches the caller's records, and
/// derives every analytic view over the refreshed snapshot.
///
/// Materialization is best effort: its failure is logged and analytics
/// still run over whatever the store holds. A failure while fetching the
/// collections themselves is fatal; the bundle is all-or-nothing.
pub fn comprehensive_overview(
    store: &dyn RecordStore,
    today: NaiveDate,
    options: OverviewOptions,
) -> Result<FinanceOverview, CoreError> {
    match RecurrenceMaterializer::run(store, today) {
        Ok(report) if report.total() > 0 => {
            debug!(posted = report.total(), "materialized recurring entries");
        }
        Ok(_) => {}
        Err(err) => {
            warn!(error = %err, "recurring materialization failed; continuing with stored data");
        }
    }

    let accounts = store.list_accounts()?;
    let transactions = store.list_transactions()?;
    let assets = store.list_assets()?;
    let liabilities = store.list_liabilities()?;
    let goal_records = store.list_goals()?;

    let summary = summary::financial_summary(&assets, &liabilities, &transactions, today);
    let expense_breakdown = summary::expense_breakdown(&transactions);
    let asset_allocation = summary::asset_allocation(&assets);
    let income_vs_expense = summary::income_vs_expense(&transactions, today);
    let net_worth_trend = summary::net_worth_trend(&assets, &liabilities, &transactions, today);
    let health_score = health::health_score(&summary, &goal_records);
    let anomalies = anomaly::spending_anomalies(&transactions, today, options.anomaly_threshold);
    let goal_feasibilities =
        goals::goal_feasibility(&goal_records, summary.monthly_surplus, today);
    let insights = insights::generate_insights(
        &summary,
        &anomalies,
        &goal_feasibilities,
        &health_score,
    );

    Ok(FinanceOverview {
        accounts,
        transactions,
        assets,
        liabilities,
        goals: goal_records,
        summary,
        expense_breakdown,
        asset_allocation,
        income_vs_expense,
        net_worth_trend,
        health_score,
        anomalies,
        goal_feasibilities,
        insights,
    })
}
