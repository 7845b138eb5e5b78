//! Pure aggregation over the materialized collections.
//!
//! Every function here is side-effect free and buckets transactions by
//! calendar month relative to an explicitly supplied `today`.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;

use finsight_domain::{
    month_label, month_label_long, same_month, shift_month, Asset, AssetSlice, AssetType,
    ExpenseSlice, FinancialSummary, Liability, MonthlyFlow, MonthlySummary, NetWorthPoint,
    SummaryTrends, Transaction, TrendDelta,
};

use crate::round1;

/// Months rendered in the trailing series views.
pub const TREND_MONTHS: usize = 6;

const OTHER_COLOR: &str = "#64748b";

static EXPENSE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("food", "#ef4444"),
        ("rent", "#8b5cf6"),
        ("emi", "#f59e0b"),
        ("travel", "#06b6d4"),
        ("subscription", "#ec4899"),
        ("medical", "#14b8a6"),
        ("utilities", "#6366f1"),
        ("shopping", "#f97316"),
        ("entertainment", "#a855f7"),
        ("education", "#3b82f6"),
        ("insurance", "#10b981"),
        ("fuel", "#eab308"),
        ("groceries", "#22c55e"),
        ("investment", "#0ea5e9"),
        ("other", OTHER_COLOR),
    ])
});

static ASSET_COLORS: Lazy<HashMap<AssetType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (AssetType::Gold, "#f59e0b"),
        (AssetType::Crypto, "#8b5cf6"),
        (AssetType::Stocks, "#3b82f6"),
        (AssetType::MutualFunds, "#06b6d4"),
        (AssetType::Property, "#10b981"),
        (AssetType::Cash, "#22c55e"),
        (AssetType::FixedDeposit, "#14b8a6"),
        (AssetType::Ppf, "#6366f1"),
        (AssetType::Other, OTHER_COLOR),
    ])
});

fn expense_color(category: &str) -> &'static str {
    EXPENSE_COLORS.get(category).copied().unwrap_or(OTHER_COLOR)
}

fn month_income(transactions: &[Transaction], reference: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_income() && same_month(txn.effective_date(), reference))
        .map(|txn| txn.amount)
        .sum()
}

fn month_expenses(transactions: &[Transaction], reference: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_expense() && same_month(txn.effective_date(), reference))
        .map(|txn| txn.amount)
        .sum()
}

fn trend_delta(current: f64, previous: f64) -> TrendDelta {
    if previous == 0.0 {
        return TrendDelta {
            percent: 0.0,
            is_up: current >= 0.0,
        };
    }
    let diff = (current - previous) / previous * 100.0;
    TrendDelta {
        percent: round1(diff).abs(),
        is_up: diff >= 0.0,
    }
}

/// Headline position: totals, current-month flows, ratios, and
/// month-over-month trend deltas.
pub fn financial_summary(
    assets: &[Asset],
    liabilities: &[Liability],
    transactions: &[Transaction],
    today: NaiveDate,
) -> FinancialSummary {
    let total_assets: f64 = assets.iter().map(|a| a.current_value).sum();
    let total_liabilities: f64 = liabilities.iter().map(|l| l.outstanding_amount).sum();
    let net_worth = total_assets - total_liabilities;

    let monthly_income = month_income(transactions, today);
    let monthly_expenses = month_expenses(transactions, today);
    let monthly_surplus = monthly_income - monthly_expenses;
    let savings_rate = if monthly_income > 0.0 {
        monthly_surplus / monthly_income * 100.0
    } else {
        0.0
    };
    let expense_ratio = if monthly_income > 0.0 {
        monthly_expenses / monthly_income * 100.0
    } else {
        0.0
    };

    let invested: f64 = assets
        .iter()
        .filter(|a| a.kind.is_invested())
        .map(|a| a.current_value)
        .sum();
    let investment_ratio = if net_worth > 0.0 {
        invested / net_worth * 100.0
    } else {
        0.0
    };

    let liquid: f64 = assets
        .iter()
        .filter(|a| a.kind.is_liquid())
        .map(|a| a.current_value)
        .sum();
    let emergency_fund_coverage = if monthly_expenses > 0.0 {
        liquid / monthly_expenses
    } else {
        0.0
    };

    let total_emi: f64 = liabilities.iter().map(|l| l.emi_amount).sum();
    let debt_to_income_ratio = if monthly_income > 0.0 {
        total_emi / monthly_income * 100.0
    } else {
        0.0
    };

    let previous = shift_month(today, -1);
    let prev_income = month_income(transactions, previous);
    let prev_expenses = month_expenses(transactions, previous);
    let prev_surplus = prev_income - prev_expenses;

    FinancialSummary {
        total_assets,
        total_liabilities,
        net_worth,
        monthly_income,
        monthly_expenses,
        monthly_surplus,
        savings_rate: round1(savings_rate),
        expense_ratio: round1(expense_ratio),
        investment_ratio: round1(investment_ratio),
        emergency_fund_coverage: round1(emergency_fund_coverage),
        debt_to_income_ratio: round1(debt_to_income_ratio),
        trends: SummaryTrends {
            // No stored history exists, so last month's net worth is
            // approximated by backing out this month's surplus.
            net_worth: trend_delta(net_worth, net_worth - monthly_surplus),
            income: trend_delta(monthly_income, prev_income),
            expenses: trend_delta(monthly_expenses, prev_expenses),
            surplus: trend_delta(monthly_surplus, prev_surplus),
        },
    }
}

/// Groups all expense entries by category, sorted by amount descending.
/// Uncategorized entries fall under "other".
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<ExpenseSlice> {
    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let category = if txn.category.is_empty() {
            "other"
        } else {
            txn.category.as_str()
        };
        *by_category.entry(category).or_default() += txn.amount;
    }

    let total: f64 = by_category.values().sum();
    let mut slices: Vec<ExpenseSlice> = by_category
        .into_iter()
        .map(|(category, amount)| ExpenseSlice {
            category: category.to_string(),
            amount,
            percentage: if total > 0.0 {
                round1(amount / total * 100.0)
            } else {
                0.0
            },
            color: expense_color(category).to_string(),
        })
        .collect();
    slices.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    slices
}

/// Groups holdings by asset type over current value, sorted descending.
pub fn asset_allocation(assets: &[Asset]) -> Vec<AssetSlice> {
    let mut by_kind: HashMap<AssetType, f64> = HashMap::new();
    for asset in assets {
        *by_kind.entry(asset.kind).or_default() += asset.current_value;
    }

    let total: f64 = by_kind.values().sum();
    let mut slices: Vec<AssetSlice> = by_kind
        .into_iter()
        .map(|(kind, value)| AssetSlice {
            kind,
            value,
            percentage: if total > 0.0 {
                round1(value / total * 100.0)
            } else {
                0.0
            },
            color: ASSET_COLORS
                .get(&kind)
                .copied()
                .unwrap_or(OTHER_COLOR)
                .to_string(),
        })
        .collect();
    slices.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.kind.as_str().cmp(b.kind.as_str()))
    });
    slices
}

/// Income and expense totals for the six months ending today, oldest
/// month first.
pub fn income_vs_expense(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlyFlow> {
    (0..TREND_MONTHS)
        .rev()
        .map(|offset| {
            let reference = shift_month(today, -(offset as i32));
            MonthlyFlow {
                month: month_label(reference.month()).to_string(),
                income: month_income(transactions, reference),
                expense: month_expenses(transactions, reference),
            }
        })
        .collect()
}

/// Reconstructs a six-month net-worth series by walking backward from the
/// current position: each earlier month backs out the following months'
/// net cash flows. The asset/liability split of each month's delta is a
/// fixed 60/40 display heuristic, not an audited history.
pub fn net_worth_trend(
    assets: &[Asset],
    liabilities: &[Liability],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<NetWorthPoint> {
    let total_assets: f64 = assets.iter().map(|a| a.current_value).sum();
    let total_liabilities: f64 = liabilities.iter().map(|l| l.outstanding_amount).sum();
    let current_net_worth = total_assets - total_liabilities;

    let cash_flows: Vec<f64> = (0..TREND_MONTHS)
        .rev()
        .map(|offset| {
            let reference = shift_month(today, -(offset as i32));
            month_income(transactions, reference) - month_expenses(transactions, reference)
        })
        .collect();

    let mut values = vec![0.0; cash_flows.len()];
    let mut running = current_net_worth;
    for idx in (0..cash_flows.len()).rev() {
        values[idx] = running;
        running -= cash_flows[idx];
    }

    values
        .iter()
        .enumerate()
        .map(|(idx, &net_worth)| {
            let reference = shift_month(today, -((TREND_MONTHS - 1 - idx) as i32));
            let drawdown = current_net_worth - net_worth;
            NetWorthPoint {
                month: month_label(reference.month()).to_string(),
                assets: total_assets - drawdown * 0.6,
                liabilities: total_liabilities - drawdown * 0.4,
                net_worth,
            }
        })
        .collect()
}

/// Per-month recap over a trailing window, newest month first. Top expense
/// category reads "N/A" for months with no spend.
pub fn monthly_summaries(
    transactions: &[Transaction],
    today: NaiveDate,
    months_back: usize,
) -> Vec<MonthlySummary> {
    (0..months_back)
        .map(|offset| {
            let reference = shift_month(today, -(offset as i32));
            let total_income = month_income(transactions, reference);
            let total_expenses = month_expenses(transactions, reference);

            let mut by_category: HashMap<&str, f64> = HashMap::new();
            for txn in transactions
                .iter()
                .filter(|txn| txn.is_expense() && same_month(txn.effective_date(), reference))
            {
                *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
            }
            let mut ranked: Vec<(&str, f64)> = by_category.into_iter().collect();
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.0.cmp(b.0))
            });
            let (top_expense_category, top_expense_amount) = ranked
                .first()
                .map(|(category, amount)| (category.to_string(), *amount))
                .unwrap_or_else(|| ("N/A".to_string(), 0.0));

            let surplus = total_income - total_expenses;
            let savings_rate = if total_income > 0.0 {
                (surplus / total_income * 100.0).round()
            } else {
                0.0
            };

            MonthlySummary {
                month: month_label_long(reference.month()).to_string(),
                year: reference.year(),
                total_income,
                total_expenses,
                surplus,
                savings_rate,
                top_expense_category,
                top_expense_amount,
            }
        })
        .collect()
}
