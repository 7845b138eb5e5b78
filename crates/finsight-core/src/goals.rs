//! Goal feasibility against the current monthly surplus.

use chrono::NaiveDate;

use finsight_domain::{months_between, FinancialGoal, GoalFeasibility};

use crate::round1;

/// Computes the monthly savings each goal still requires and whether the
/// current surplus covers it. The horizon never drops below one month, so
/// an overdue goal demands its full remainder immediately instead of
/// dividing by zero.
pub fn goal_feasibility(
    goals: &[FinancialGoal],
    monthly_surplus: f64,
    today: NaiveDate,
) -> Vec<GoalFeasibility> {
    goals
        .iter()
        .map(|goal| {
            let months_remaining = months_between(today, goal.target_date).max(1) as u32;
            let remaining = (goal.target_amount - goal.current_saved).max(0.0);
            let required = remaining / months_remaining as f64;
            GoalFeasibility {
                goal_id: goal.id,
                goal_name: goal.name.clone(),
                target_amount: goal.target_amount,
                current_saved: goal.current_saved,
                percent_complete: round1(goal.progress_percent()).min(100.0),
                months_remaining,
                required_monthly_savings: required.round(),
                is_feasible: required <= monthly_surplus,
                current_surplus: monthly_surplus,
            }
        })
        .collect()
}
