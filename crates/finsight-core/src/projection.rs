//! Compound-growth wealth simulation, independent of stored records.

use chrono::{Datelike, NaiveDate};

use finsight_domain::{
    month_label, shift_month, ProjectionMilestone, ProjectionPoint, WealthProjection,
};

use crate::format::format_amount_short;

/// Wealth levels recorded as milestones, ascending.
const MILESTONE_LADDER: [f64; 7] = [
    100_000.0,
    250_000.0,
    500_000.0,
    1_000_000.0,
    2_500_000.0,
    5_000_000.0,
    10_000_000.0,
];

/// Months between recorded snapshots.
const SNAPSHOT_INTERVAL: u32 = 3;

/// Simulates monthly contributions compounding at the given annual rate.
/// The contribution lands before the month's return is applied (ordinary
/// annuity). Snapshots are recorded every third month and at the final
/// month; each milestone is recorded once, at the first month the running
/// wealth reaches it.
pub fn wealth_projection(
    monthly_savings: f64,
    annual_return_percent: f64,
    duration_years: u32,
    initial_amount: f64,
    today: NaiveDate,
) -> WealthProjection {
    let monthly_rate = annual_return_percent / 100.0 / 12.0;
    let total_months = duration_years * 12;

    let mut projections = Vec::new();
    let mut milestones = Vec::new();
    let mut next_milestone = 0usize;
    let mut wealth = initial_amount;

    for month in 0..=total_months {
        if month % SNAPSHOT_INTERVAL == 0 || month == total_months {
            let invested = initial_amount + monthly_savings * month as f64;
            projections.push(ProjectionPoint {
                year: month / 12,
                month: month % 12,
                label: if month == 0 {
                    "Now".to_string()
                } else {
                    format!("{}Y {}M", month / 12, month % 12)
                },
                projected_wealth: wealth.round(),
                total_invested: invested,
                returns: (wealth - invested).round(),
            });
        }

        while next_milestone < MILESTONE_LADDER.len() && wealth >= MILESTONE_LADDER[next_milestone]
        {
            let target = MILESTONE_LADDER[next_milestone];
            let reached = shift_month(today, month as i32);
            milestones.push(ProjectionMilestone {
                amount: target,
                label: format_amount_short(target),
                estimated_date: format!("{} {}", month_label(reached.month()), reached.year()),
                months_to_reach: month,
            });
            next_milestone += 1;
        }

        wealth = (wealth + monthly_savings) * (1.0 + monthly_rate);
    }

    WealthProjection {
        projections,
        milestones,
    }
}
