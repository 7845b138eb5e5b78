//! Monthly materialization of recurring obligations into concrete ledger
//! entries.

use chrono::{Datelike, NaiveDate};

use finsight_domain::{
    clamped_day, month_start, same_month, Asset, FinancialGoal, Liability, NewTransaction,
    Transaction,
};

use crate::{store::RecordStore, CoreError};

/// Counts of entries posted by one materialization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializationReport {
    pub templates_posted: usize,
    pub emis_posted: usize,
    pub sips_posted: usize,
    pub contributions_posted: usize,
}

impl MaterializationReport {
    pub fn total(&self) -> usize {
        self.templates_posted + self.emis_posted + self.sips_posted + self.contributions_posted
    }
}

/// Posts at most one concrete transaction per recurring obligation per
/// calendar month, leaving the templates themselves untouched.
///
/// Duplicate detection is heuristic: a posting is skipped when a
/// transaction in the current month already matches on name (exact for
/// templates, substring for EMIs, SIPs, and goal contributions) and exact
/// amount. A coincidentally identical user entry therefore suppresses
/// materialization for that month. The first store failure aborts the rest
/// of the pass; the next invocation retries whatever is still missing.
pub struct RecurrenceMaterializer;

impl RecurrenceMaterializer {
    pub fn run(
        store: &dyn RecordStore,
        today: NaiveDate,
    ) -> Result<MaterializationReport, CoreError> {
        let transactions = store.list_transactions()?;
        let assets = store.list_assets()?;
        let liabilities = store.list_liabilities()?;
        let goals = store.list_goals()?;

        let report = MaterializationReport {
            templates_posted: Self::post_template_copies(store, &transactions, today)?,
            emis_posted: Self::post_liability_emis(store, &transactions, &liabilities, today)?,
            sips_posted: Self::post_asset_sips(store, &transactions, &assets, today)?,
            contributions_posted: Self::post_goal_contributions(
                store,
                &transactions,
                &goals,
                today,
            )?,
        };
        Ok(report)
    }

    /// Copies each recurring template into the current month, dated on the
    /// template's day-of-month (clamped to the month's length).
    fn post_template_copies(
        store: &dyn RecordStore,
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Result<usize, CoreError> {
        let mut posted = 0;
        for template in transactions.iter().filter(|txn| txn.is_recurring) {
            let template_date = template.effective_date();
            if !starts_before_month(template_date, today) {
                continue;
            }
            let exists = transactions.iter().any(|txn| {
                !txn.is_recurring
                    && txn.name == template.name
                    && txn.amount == template.amount
                    && same_month(txn.effective_date(), today)
            });
            if exists {
                continue;
            }
            let date = clamped_day(today.year(), today.month(), template_date.day());
            store.create_transaction(NewTransaction {
                name: template.name.clone(),
                amount: template.amount,
                kind: template.kind,
                category: template.category.clone(),
                date,
                is_recurring: false,
            })?;
            posted += 1;
        }
        Ok(posted)
    }

    /// Posts the month's installment for each recurring liability. The
    /// liability's `outstanding_amount` is not reduced here; principal
    /// paydown stays with the record owner.
    fn post_liability_emis(
        store: &dyn RecordStore,
        transactions: &[Transaction],
        liabilities: &[Liability],
        today: NaiveDate,
    ) -> Result<usize, CoreError> {
        let mut posted = 0;
        for liability in liabilities.iter().filter(|l| l.is_recurring) {
            if month_has_matching_entry(transactions, &liability.name, liability.emi_amount, today)
            {
                continue;
            }
            let date = clamped_day(today.year(), today.month(), liability.due_date.day());
            store.create_transaction(NewTransaction::expense(
                format!("Loan EMI: {}", liability.name),
                liability.emi_amount,
                "emi",
                date,
            ))?;
            posted += 1;
        }
        Ok(posted)
    }

    /// Posts each SIP contribution on the 1st and grows the asset by the
    /// contributed amount.
    fn post_asset_sips(
        store: &dyn RecordStore,
        transactions: &[Transaction],
        assets: &[Asset],
        today: NaiveDate,
    ) -> Result<usize, CoreError> {
        let mut posted = 0;
        for asset in assets.iter().filter(|a| a.is_recurring) {
            let amount = match asset.recurring_amount {
                Some(amount) if amount > 0.0 => amount,
                _ => continue,
            };
            if month_has_matching_entry(transactions, &asset.name, amount, today) {
                continue;
            }
            store.create_transaction(NewTransaction::expense(
                format!("SIP Invest: {}", asset.name),
                amount,
                "investment",
                month_start(today),
            ))?;
            let mut updated = asset.clone();
            updated.current_value += amount;
            store.update_asset(&updated)?;
            posted += 1;
        }
        Ok(posted)
    }

    /// Posts each goal contribution on the 1st and advances the goal's
    /// saved total.
    fn post_goal_contributions(
        store: &dyn RecordStore,
        transactions: &[Transaction],
        goals: &[FinancialGoal],
        today: NaiveDate,
    ) -> Result<usize, CoreError> {
        let mut posted = 0;
        for goal in goals.iter().filter(|g| g.is_recurring) {
            let amount = match goal.recurring_amount {
                Some(amount) if amount > 0.0 => amount,
                _ => continue,
            };
            if month_has_matching_entry(transactions, &goal.name, amount, today) {
                continue;
            }
            store.create_transaction(NewTransaction::expense(
                format!("Goal Save: {}", goal.name),
                amount,
                "investment",
                month_start(today),
            ))?;
            let mut updated = goal.clone();
            updated.current_saved += amount;
            store.update_goal(&updated)?;
            posted += 1;
        }
        Ok(posted)
    }
}

/// True when the template's (year, month) strictly precedes today's.
fn starts_before_month(template: NaiveDate, today: NaiveDate) -> bool {
    (template.year(), template.month()) < (today.year(), today.month())
}

/// Heuristic duplicate guard: any current-month entry whose name contains
/// `name` with exactly `amount`.
fn month_has_matching_entry(
    transactions: &[Transaction],
    name: &str,
    amount: f64,
    today: NaiveDate,
) -> bool {
    transactions.iter().any(|txn| {
        txn.name.contains(name) && txn.amount == amount && same_month(txn.effective_date(), today)
    })
}
