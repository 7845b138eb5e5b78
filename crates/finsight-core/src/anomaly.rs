//! Spending anomaly detection against trailing category averages.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use finsight_domain::{same_month, shift_month, AnomalySeverity, SpendingAnomaly, Transaction};

/// Default percentage swing that flags a category.
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 30.0;

/// Current month plus the trailing baseline months.
const WINDOW_MONTHS: usize = 4;

/// Flags expense categories whose current-month spend moved at least
/// `threshold` percent against the mean of the non-zero preceding three
/// months. Categories without any non-zero baseline month are skipped
/// entirely; a swing exactly at the threshold is included. Results sort by
/// swing magnitude, largest first.
pub fn spending_anomalies(
    transactions: &[Transaction],
    today: NaiveDate,
    threshold: f64,
) -> Vec<SpendingAnomaly> {
    let mut windows: HashMap<String, Vec<f64>> = HashMap::new();
    for offset in 0..WINDOW_MONTHS {
        let reference = shift_month(today, -(offset as i32));
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for txn in transactions
            .iter()
            .filter(|txn| txn.is_expense() && same_month(txn.effective_date(), reference))
        {
            let category = if txn.category.is_empty() {
                "other"
            } else {
                txn.category.as_str()
            };
            *totals.entry(category).or_default() += txn.amount;
        }
        for (category, amount) in totals {
            let slots = windows.entry(category.to_string()).or_default();
            // Slot index equals the month offset; pad silent months with zero.
            while slots.len() < offset {
                slots.push(0.0);
            }
            slots.push(amount);
        }
    }

    let mut anomalies = Vec::new();
    for (category, months) in windows {
        if months.len() < 2 {
            continue;
        }
        let current = months[0];
        let baseline: Vec<f64> = months[1..].iter().copied().filter(|v| *v > 0.0).collect();
        if baseline.is_empty() {
            continue;
        }
        let average = baseline.iter().sum::<f64>() / baseline.len() as f64;
        let change = (current - average) / average * 100.0;
        if change.abs() < threshold {
            continue;
        }
        let severity = if change.abs() >= 80.0 {
            AnomalySeverity::High
        } else if change.abs() >= 50.0 {
            AnomalySeverity::Medium
        } else {
            AnomalySeverity::Low
        };
        anomalies.push(SpendingAnomaly {
            category,
            current_month: current,
            average: average.round(),
            change_percent: change.round(),
            is_increase: change > 0.0,
            severity,
        });
    }

    anomalies.sort_by(|a, b| {
        b.change_percent
            .abs()
            .partial_cmp(&a.change_percent.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    anomalies
}
