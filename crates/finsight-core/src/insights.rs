//! Rule-based synthesis of natural-language insights.
//!
//! Each rule contributes at most one insight, except anomalies (top three
//! by magnitude) and goals (one per goal). Ids are stable per subject so
//! consumers can key them across refreshes.

use finsight_domain::{
    AnomalySeverity, FinancialHealthScore, FinancialInsight, FinancialSummary, GoalFeasibility,
    InsightKind, SpendingAnomaly,
};

use crate::format::format_amount_full;

const MAX_ANOMALY_INSIGHTS: usize = 3;

pub fn generate_insights(
    summary: &FinancialSummary,
    anomalies: &[SpendingAnomaly],
    feasibilities: &[GoalFeasibility],
    health: &FinancialHealthScore,
) -> Vec<FinancialInsight> {
    let mut insights = Vec::new();

    if summary.savings_rate > 20.0 {
        insights.push(FinancialInsight {
            id: "savings-positive".to_string(),
            kind: InsightKind::Positive,
            title: "Strong Savings Rate".to_string(),
            message: format!(
                "Your savings rate is {}%, above the recommended 20%.",
                summary.savings_rate
            ),
            metric: Some(format!("{}%", summary.savings_rate)),
            change: None,
        });
    } else if summary.savings_rate < 10.0 {
        insights.push(FinancialInsight {
            id: "savings-warning".to_string(),
            kind: InsightKind::Warning,
            title: "Low Savings Rate".to_string(),
            message: format!(
                "Your savings rate is {}%. Aim for at least 20%.",
                summary.savings_rate
            ),
            metric: Some(format!("{}%", summary.savings_rate)),
            change: None,
        });
    }

    let funded = summary.emergency_fund_coverage >= 3.0;
    insights.push(FinancialInsight {
        id: "emergency-fund".to_string(),
        kind: if funded {
            InsightKind::Positive
        } else {
            InsightKind::Warning
        },
        title: "Emergency Fund Coverage".to_string(),
        message: format!(
            "Emergency fund covers {} months of expenses.",
            summary.emergency_fund_coverage
        ),
        metric: Some(format!("{} months", summary.emergency_fund_coverage)),
        change: None,
    });

    for anomaly in anomalies.iter().take(MAX_ANOMALY_INSIGHTS) {
        let direction = if anomaly.is_increase {
            "increased"
        } else {
            "decreased"
        };
        let kind = if anomaly.is_increase && anomaly.severity != AnomalySeverity::Low {
            InsightKind::Warning
        } else {
            InsightKind::Info
        };
        let category = titlecase(&anomaly.category);
        insights.push(FinancialInsight {
            id: format!("anomaly-{}", anomaly.category),
            kind,
            title: format!("{} Spending {}", category, titlecase(direction)),
            message: format!(
                "{} spending {} {}% compared to average.",
                category,
                direction,
                anomaly.change_percent.abs()
            ),
            metric: None,
            change: Some(anomaly.change_percent),
        });
    }

    for goal in feasibilities {
        if goal.percent_complete >= 100.0 {
            insights.push(FinancialInsight {
                id: format!("goal-complete-{}", goal.goal_id),
                kind: InsightKind::Positive,
                title: "Goal Achieved!".to_string(),
                message: format!(
                    "Congratulations! You've reached your \"{}\" goal.",
                    goal.goal_name
                ),
                metric: Some("100%".to_string()),
                change: None,
            });
        } else if !goal.is_feasible {
            insights.push(FinancialInsight {
                id: format!("goal-risk-{}", goal.goal_id),
                kind: InsightKind::Critical,
                title: "Goal At Risk".to_string(),
                message: format!(
                    "\"{}\" requires {}/month but surplus is {}.",
                    goal.goal_name,
                    format_amount_full(goal.required_monthly_savings),
                    format_amount_full(goal.current_surplus)
                ),
                metric: Some(format!("{}%", goal.percent_complete)),
                change: None,
            });
        } else if goal.percent_complete > 0.0 {
            insights.push(FinancialInsight {
                id: format!("goal-progress-{}", goal.goal_id),
                kind: InsightKind::Info,
                title: "Goal Progress".to_string(),
                message: format!(
                    "You are {}% of the way to \"{}\".",
                    goal.percent_complete, goal.goal_name
                ),
                metric: Some(format!("{}%", goal.percent_complete)),
                change: None,
            });
        }
    }

    if health.total_score >= 80 {
        insights.push(FinancialInsight {
            id: "health-excellent".to_string(),
            kind: InsightKind::Positive,
            title: "Excellent Financial Health".to_string(),
            message: format!(
                "Your financial health score is {}/100. Keep doing what works.",
                health.total_score
            ),
            metric: Some(health.total_score.to_string()),
            change: None,
        });
    } else if health.total_score < 45 {
        let focus = health
            .suggestions
            .first()
            .map(String::as_str)
            .unwrap_or("improving your finances");
        insights.push(FinancialInsight {
            id: "health-critical".to_string(),
            kind: InsightKind::Critical,
            title: "Financial Health Needs Attention".to_string(),
            message: format!(
                "Your financial health score is {}/100. Focus on: {}",
                health.total_score, focus
            ),
            metric: Some(health.total_score.to_string()),
            change: None,
        });
    }

    insights
}

// "mutual_funds" -> "Mutual funds"
fn titlecase(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use finsight_domain::{
        HealthBreakdown, RiskLevel, ScoreComponent, SummaryTrends, TrendDelta,
    };
    use uuid::Uuid;

    use super::*;

    fn summary_with(savings_rate: f64, emergency_fund_coverage: f64) -> FinancialSummary {
        let delta = TrendDelta {
            percent: 0.0,
            is_up: true,
        };
        FinancialSummary {
            total_assets: 0.0,
            total_liabilities: 0.0,
            net_worth: 0.0,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            monthly_surplus: 0.0,
            savings_rate,
            expense_ratio: 0.0,
            investment_ratio: 0.0,
            emergency_fund_coverage,
            debt_to_income_ratio: 0.0,
            trends: SummaryTrends {
                net_worth: delta,
                income: delta,
                expenses: delta,
                surplus: delta,
            },
        }
    }

    fn health_with(total_score: u32, suggestions: Vec<String>) -> FinancialHealthScore {
        let component = ScoreComponent {
            score: 0,
            weight: 20,
            label: String::new(),
            raw_value: 0.0,
            unit: "%".to_string(),
        };
        FinancialHealthScore {
            total_score,
            risk_level: RiskLevel::Fair,
            risk_color: RiskLevel::Fair.color().to_string(),
            breakdown: HealthBreakdown {
                savings_rate: component.clone(),
                debt_to_income: component.clone(),
                emergency_fund: component.clone(),
                expense_control: component.clone(),
                goal_progress: component,
            },
            suggestions,
        }
    }

    fn anomaly(category: &str, change_percent: f64, severity: AnomalySeverity) -> SpendingAnomaly {
        SpendingAnomaly {
            category: category.to_string(),
            current_month: 0.0,
            average: 0.0,
            change_percent,
            is_increase: change_percent > 0.0,
            severity,
        }
    }

    fn feasibility(percent_complete: f64, is_feasible: bool) -> GoalFeasibility {
        GoalFeasibility {
            goal_id: Uuid::new_v4(),
            goal_name: "House".to_string(),
            target_amount: 100_000.0,
            current_saved: 0.0,
            percent_complete,
            months_remaining: 12,
            required_monthly_savings: 25_000.0,
            is_feasible,
            current_surplus: 10_000.0,
        }
    }

    fn find<'a>(insights: &'a [FinancialInsight], id: &str) -> Option<&'a FinancialInsight> {
        insights.iter().find(|insight| insight.id == id)
    }

    #[test]
    fn strong_savings_produce_a_positive_insight() {
        let insights =
            generate_insights(&summary_with(25.0, 5.0), &[], &[], &health_with(60, vec![]));
        let found = find(&insights, "savings-positive").expect("savings insight");
        assert_eq!(found.kind, InsightKind::Positive);
        assert!(found.message.contains("25%"));
    }

    #[test]
    fn weak_savings_produce_a_warning() {
        let insights =
            generate_insights(&summary_with(4.0, 5.0), &[], &[], &health_with(60, vec![]));
        assert!(find(&insights, "savings-warning").is_some());
        assert!(find(&insights, "savings-positive").is_none());
    }

    #[test]
    fn middling_savings_rate_stays_silent() {
        let insights =
            generate_insights(&summary_with(15.0, 5.0), &[], &[], &health_with(60, vec![]));
        assert!(find(&insights, "savings-positive").is_none());
        assert!(find(&insights, "savings-warning").is_none());
    }

    #[test]
    fn emergency_fund_insight_is_always_present() {
        let funded =
            generate_insights(&summary_with(15.0, 4.0), &[], &[], &health_with(60, vec![]));
        assert_eq!(
            find(&funded, "emergency-fund").unwrap().kind,
            InsightKind::Positive
        );
        let thin = generate_insights(&summary_with(15.0, 1.0), &[], &[], &health_with(60, vec![]));
        assert_eq!(
            find(&thin, "emergency-fund").unwrap().kind,
            InsightKind::Warning
        );
    }

    #[test]
    fn anomaly_insights_cap_at_three() {
        let anomalies = vec![
            anomaly("food", 120.0, AnomalySeverity::High),
            anomaly("fuel", 90.0, AnomalySeverity::High),
            anomaly("travel", 60.0, AnomalySeverity::Medium),
            anomaly("shopping", 40.0, AnomalySeverity::Low),
        ];
        let insights = generate_insights(
            &summary_with(15.0, 5.0),
            &anomalies,
            &[],
            &health_with(60, vec![]),
        );
        let anomaly_count = insights
            .iter()
            .filter(|insight| insight.id.starts_with("anomaly-"))
            .count();
        assert_eq!(anomaly_count, 3);
        assert!(find(&insights, "anomaly-shopping").is_none());
    }

    #[test]
    fn low_severity_increase_is_informational() {
        let anomalies = vec![anomaly("food", 35.0, AnomalySeverity::Low)];
        let insights = generate_insights(
            &summary_with(15.0, 5.0),
            &anomalies,
            &[],
            &health_with(60, vec![]),
        );
        assert_eq!(
            find(&insights, "anomaly-food").unwrap().kind,
            InsightKind::Info
        );
    }

    #[test]
    fn goal_branches_are_mutually_exclusive_per_goal() {
        let done = feasibility(100.0, true);
        let at_risk = feasibility(40.0, false);
        let underway = feasibility(40.0, true);
        let insights = generate_insights(
            &summary_with(15.0, 5.0),
            &[],
            &[done.clone(), at_risk.clone(), underway.clone()],
            &health_with(60, vec![]),
        );
        assert!(find(&insights, &format!("goal-complete-{}", done.goal_id)).is_some());
        let risk = find(&insights, &format!("goal-risk-{}", at_risk.goal_id)).expect("risk");
        assert_eq!(risk.kind, InsightKind::Critical);
        assert!(risk.message.contains("₹25,000"));
        assert!(risk.message.contains("₹10,000"));
        assert!(find(&insights, &format!("goal-progress-{}", underway.goal_id)).is_some());
    }

    #[test]
    fn health_extremes_add_a_closing_insight() {
        let strong =
            generate_insights(&summary_with(15.0, 5.0), &[], &[], &health_with(85, vec![]));
        assert!(find(&strong, "health-excellent").is_some());

        let weak = generate_insights(
            &summary_with(15.0, 5.0),
            &[],
            &[],
            &health_with(30, vec!["Save more.".to_string()]),
        );
        let critical = find(&weak, "health-critical").expect("critical insight");
        assert!(critical.message.contains("Save more."));
    }

    #[test]
    fn titlecase_replaces_underscores() {
        assert_eq!(super::titlecase("mutual_funds"), "Mutual funds");
        assert_eq!(super::titlecase("food"), "Food");
    }
}
