//! Derived report types produced by the analytics engine.
//!
//! Everything here is recomputed on request from the raw records and never
//! persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::AssetType;

/// Month-over-month movement of a headline figure. `percent` is the
/// magnitude of the change; direction is carried separately so a zero
/// baseline can still report a defined, non-negative trend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendDelta {
    pub percent: f64,
    pub is_up: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryTrends {
    pub net_worth: TrendDelta,
    pub income: TrendDelta,
    pub expenses: TrendDelta,
    pub surplus: TrendDelta,
}

/// Headline financial position for the current month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_surplus: f64,
    /// Surplus as a share of income, percent, one decimal.
    pub savings_rate: f64,
    pub expense_ratio: f64,
    pub investment_ratio: f64,
    /// Months of expenses covered by liquid assets.
    pub emergency_fund_coverage: f64,
    pub debt_to_income_ratio: f64,
    pub trends: SummaryTrends,
}

/// One category's share of total expense spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseSlice {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub color: String,
}

/// One asset type's share of total holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetSlice {
    pub kind: AssetType,
    pub value: f64,
    pub percentage: f64,
    pub color: String,
}

/// Income and expense totals for one month of the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Reconstructed month-end position. The asset/liability split is a display
/// heuristic, not an audited historical ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetWorthPoint {
    pub month: String,
    pub assets: f64,
    pub liabilities: f64,
    pub net_worth: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl RiskLevel {
    /// Fixed display color per tier.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Excellent => "#10b981",
            RiskLevel::Good => "#22c55e",
            RiskLevel::Fair => "#f59e0b",
            RiskLevel::Poor => "#f97316",
            RiskLevel::Critical => "#ef4444",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Excellent => "Excellent",
            RiskLevel::Good => "Good",
            RiskLevel::Fair => "Fair",
            RiskLevel::Poor => "Poor",
            RiskLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// One weighted component of the health score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreComponent {
    pub score: u32,
    /// Weight in percent; all component weights sum to 100.
    pub weight: u32,
    pub label: String,
    pub raw_value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthBreakdown {
    pub savings_rate: ScoreComponent,
    pub debt_to_income: ScoreComponent,
    pub emergency_fund: ScoreComponent,
    pub expense_control: ScoreComponent,
    pub goal_progress: ScoreComponent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialHealthScore {
    pub total_score: u32,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub breakdown: HealthBreakdown,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnomalySeverity::Low => "Low",
            AnomalySeverity::Medium => "Medium",
            AnomalySeverity::High => "High",
        };
        f.write_str(label)
    }
}

/// A category whose current-month spend moved sharply against its
/// trailing average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingAnomaly {
    pub category: String,
    pub current_month: f64,
    pub average: f64,
    pub change_percent: f64,
    pub is_increase: bool,
    pub severity: AnomalySeverity,
}

/// Whether a goal remains reachable at the current monthly surplus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalFeasibility {
    pub goal_id: Uuid,
    pub goal_name: String,
    pub target_amount: f64,
    pub current_saved: f64,
    /// Clamped to at most 100.
    pub percent_complete: f64,
    pub months_remaining: u32,
    pub required_monthly_savings: f64,
    pub is_feasible: bool,
    pub current_surplus: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
    Critical,
}

/// A rendered observation about the user's finances. `id` is stable for a
/// given subject so consumers can key and dedup insights across refreshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialInsight {
    pub id: String,
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Snapshot of the wealth simulation at one sampled month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub month: u32,
    pub label: String,
    pub projected_wealth: f64,
    pub total_invested: f64,
    pub returns: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionMilestone {
    pub amount: f64,
    pub label: String,
    pub estimated_date: String,
    pub months_to_reach: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WealthProjection {
    pub projections: Vec<ProjectionPoint>,
    pub milestones: Vec<ProjectionMilestone>,
}

/// Per-month recap over a trailing window, newest month first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub year: i32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub surplus: f64,
    /// Rounded to a whole percent.
    pub savings_rate: f64,
    pub top_expense_category: String,
    pub top_expense_amount: f64,
}
