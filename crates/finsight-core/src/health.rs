//! Weighted composite scoring of overall financial health.

use finsight_domain::{
    FinancialGoal, FinancialHealthScore, FinancialSummary, HealthBreakdown, RiskLevel,
    ScoreComponent,
};

const SAVINGS_WEIGHT: f64 = 0.25;
const DEBT_WEIGHT: f64 = 0.20;
const EMERGENCY_WEIGHT: f64 = 0.20;
const EXPENSE_WEIGHT: f64 = 0.15;
const GOAL_WEIGHT: f64 = 0.20;

/// Five step-function sub-scores blended into a 0-100 composite with a
/// risk tier and improvement suggestions. An empty suggestion list means
/// every metric is healthy.
pub fn health_score(summary: &FinancialSummary, goals: &[FinancialGoal]) -> FinancialHealthScore {
    let savings_score = savings_rate_score(summary.savings_rate);
    let debt_score = debt_to_income_score(summary.debt_to_income_ratio);
    let emergency_score = emergency_fund_score(summary.emergency_fund_coverage);
    let expense_score = expense_control_score(summary.expense_ratio);
    let goal_score = goal_progress_score(goals);

    let total_score = (savings_score as f64 * SAVINGS_WEIGHT
        + debt_score as f64 * DEBT_WEIGHT
        + emergency_score as f64 * EMERGENCY_WEIGHT
        + expense_score as f64 * EXPENSE_WEIGHT
        + goal_score as f64 * GOAL_WEIGHT)
        .round() as u32;

    let risk_level = match total_score {
        80.. => RiskLevel::Excellent,
        65.. => RiskLevel::Good,
        45.. => RiskLevel::Fair,
        25.. => RiskLevel::Poor,
        _ => RiskLevel::Critical,
    };

    let mut suggestions = Vec::new();
    if savings_score < 60 {
        suggestions.push("Aim to save at least 20% of your monthly income.".to_string());
    }
    if debt_score < 60 {
        suggestions.push(
            "Your debt payments are high. Consider debt consolidation or faster payoff."
                .to_string(),
        );
    }
    if emergency_score < 60 {
        suggestions
            .push("Build an emergency fund covering at least 3 months of expenses.".to_string());
    }
    if expense_score < 60 {
        suggestions.push(
            "Your expenses are too high relative to income. Review subscriptions and \
             discretionary spending."
                .to_string(),
        );
    }
    if goal_score < 60 {
        suggestions
            .push("You're behind on your financial goals. Increase monthly contributions.".to_string());
    }
    if summary.investment_ratio < 30.0 {
        suggestions
            .push("Consider investing more of your net worth for long-term growth.".to_string());
    }

    FinancialHealthScore {
        total_score,
        risk_level,
        risk_color: risk_level.color().to_string(),
        breakdown: HealthBreakdown {
            savings_rate: component(savings_score, 25, "Savings Rate", summary.savings_rate, "%"),
            debt_to_income: component(
                debt_score,
                20,
                "Debt-to-Income",
                summary.debt_to_income_ratio,
                "%",
            ),
            emergency_fund: component(
                emergency_score,
                20,
                "Emergency Fund",
                summary.emergency_fund_coverage,
                "m",
            ),
            expense_control: component(
                expense_score,
                15,
                "Expense Control",
                summary.expense_ratio,
                "%",
            ),
            goal_progress: component(goal_score, 20, "Goal Progress", goal_score as f64, "%"),
        },
        suggestions,
    }
}

fn component(score: u32, weight: u32, label: &str, raw_value: f64, unit: &str) -> ScoreComponent {
    ScoreComponent {
        score,
        weight,
        label: label.to_string(),
        raw_value,
        unit: unit.to_string(),
    }
}

fn savings_rate_score(rate: f64) -> u32 {
    if rate >= 30.0 {
        100
    } else if rate >= 20.0 {
        80
    } else if rate >= 10.0 {
        60
    } else if rate >= 5.0 {
        40
    } else if rate > 0.0 {
        20
    } else {
        0
    }
}

fn debt_to_income_score(ratio: f64) -> u32 {
    if ratio <= 10.0 {
        100
    } else if ratio <= 20.0 {
        80
    } else if ratio <= 35.0 {
        60
    } else if ratio <= 50.0 {
        40
    } else {
        20
    }
}

fn emergency_fund_score(months: f64) -> u32 {
    if months >= 6.0 {
        100
    } else if months >= 3.0 {
        75
    } else if months >= 1.0 {
        50
    } else {
        20
    }
}

fn expense_control_score(ratio: f64) -> u32 {
    if ratio <= 50.0 {
        100
    } else if ratio <= 70.0 {
        75
    } else if ratio <= 85.0 {
        50
    } else {
        25
    }
}

/// Mean goal completion clamped to 100 per goal; a neutral 50 with no
/// goals on record.
fn goal_progress_score(goals: &[FinancialGoal]) -> u32 {
    if goals.is_empty() {
        return 50;
    }
    let average = goals
        .iter()
        .map(|goal| goal.progress_percent().min(100.0))
        .sum::<f64>()
        / goals.len() as f64;
    (average.round() as u32).min(100)
}
