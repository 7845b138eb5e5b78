mod common;

use common::{date, emi_liability, expense, income, scratch_dir, sip_asset, FlakyStore};
use finsight::domain::{
    Account, AccountKind, Asset, AssetType, FinancialGoal, GoalCategory,
};
use finsight::{
    comprehensive_overview, CoreError, MemoryRecordStore, OverviewOptions, RecordStore,
};

fn seeded_store() -> MemoryRecordStore {
    let store = MemoryRecordStore::new();
    store.insert_account(Account::new("HDFC Savings", AccountKind::Bank, 120_000.0));

    store.insert_transaction(income("Salary", 90_000.0, date(2026, 8, 1)));
    store.insert_transaction(expense("Flat rent", 25_000.0, "rent", date(2026, 8, 2)));
    store.insert_transaction(expense("Groceries", 9_000.0, "food", date(2026, 8, 6)));
    store.insert_transaction(income("Salary", 90_000.0, date(2026, 7, 1)));
    store.insert_transaction(expense("Flat rent", 25_000.0, "rent", date(2026, 7, 2)));
    store.insert_transaction(expense("Groceries", 4_000.0, "food", date(2026, 7, 6)));

    store.insert_asset(Asset::new("Cash buffer", AssetType::Cash, 200_000.0, 200_000.0));
    store.insert_asset(Asset::new(
        "NIFTY Fund",
        AssetType::MutualFunds,
        300_000.0,
        220_000.0,
    ));
    store.insert_liability(emi_liability(
        "Car Loan",
        180_000.0,
        9_000.0,
        date(2026, 1, 12),
    ));

    let mut goal = FinancialGoal::new(
        "Down Payment",
        1_000_000.0,
        date(2027, 8, 1),
        GoalCategory::Purchase,
    );
    goal.current_saved = 250_000.0;
    store.insert_goal(goal);
    store
}

#[test]
fn overview_derives_a_coherent_bundle() {
    let store = seeded_store();
    let today = date(2026, 8, 15);
    let overview =
        comprehensive_overview(&store, today, OverviewOptions::default()).expect("overview");

    // Net worth identity against the refreshed records in the bundle.
    let asset_total: f64 = overview.assets.iter().map(|a| a.current_value).sum();
    let liability_total: f64 = overview
        .liabilities
        .iter()
        .map(|l| l.outstanding_amount)
        .sum();
    assert_eq!(overview.summary.net_worth, asset_total - liability_total);

    // The seeded liability is recurring, so August gains its EMI.
    assert_eq!(overview.summary.monthly_income, 90_000.0);
    assert_eq!(overview.summary.monthly_expenses, 25_000.0 + 9_000.0 + 9_000.0);

    assert_eq!(overview.income_vs_expense.len(), 6);
    assert_eq!(overview.net_worth_trend.len(), 6);
    assert_eq!(
        overview.net_worth_trend.last().unwrap().net_worth,
        overview.summary.net_worth
    );

    let breakdown_total: f64 = overview.expense_breakdown.iter().map(|s| s.amount).sum();
    let expense_total: f64 = overview
        .transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    assert_eq!(breakdown_total, expense_total);

    assert!(overview.health_score.total_score <= 100);
    assert_eq!(overview.goal_feasibilities.len(), 1);
    assert!(overview
        .insights
        .iter()
        .any(|insight| insight.id == "emergency-fund"));
}

#[test]
fn overview_materializes_before_aggregating() {
    let store = MemoryRecordStore::new();
    store.insert_transaction(income("Salary", 60_000.0, date(2026, 8, 1)));
    store.insert_asset(sip_asset("NIFTY Fund", 100_000.0, 10_000.0));

    let overview =
        comprehensive_overview(&store, date(2026, 8, 15), OverviewOptions::default())
            .expect("overview");

    // The SIP was posted and the refreshed asset value made it into the
    // bundle before any aggregation ran.
    assert!(overview
        .transactions
        .iter()
        .any(|txn| txn.name == "SIP Invest: NIFTY Fund"));
    assert_eq!(overview.assets[0].current_value, 110_000.0);
    assert_eq!(overview.summary.monthly_expenses, 10_000.0);
    assert_eq!(overview.summary.total_assets, 110_000.0);
}

#[test]
fn list_failures_abort_the_composite_fetch() {
    let mut store = FlakyStore::wrapping(seeded_store());
    store.fail_lists = true;
    let err = comprehensive_overview(&store, date(2026, 8, 15), OverviewOptions::default())
        .expect_err("listing failure must be fatal");
    assert!(matches!(err, CoreError::Store(_)));
}

#[test]
fn materialization_failures_do_not_block_analytics() {
    let inner = seeded_store();
    inner.insert_asset(sip_asset("Blocked Fund", 50_000.0, 5_000.0));
    let mut store = FlakyStore::wrapping(inner);
    store.fail_creates = true;

    let overview =
        comprehensive_overview(&store, date(2026, 8, 15), OverviewOptions::default())
            .expect("analytics still run");

    // Nothing was posted, and the derived views cover the stored data only.
    assert!(!overview
        .transactions
        .iter()
        .any(|txn| txn.name.starts_with("SIP Invest:")));
    assert_eq!(overview.summary.monthly_income, 90_000.0);
}

#[test]
fn anomaly_threshold_option_is_honored() {
    let store = MemoryRecordStore::new();
    // Food spend jumps 50% against a steady baseline.
    store.insert_transaction(expense("Groceries", 1_500.0, "food", date(2026, 8, 4)));
    store.insert_transaction(expense("Groceries", 1_000.0, "food", date(2026, 7, 4)));
    store.insert_transaction(expense("Groceries", 1_000.0, "food", date(2026, 6, 4)));

    let today = date(2026, 8, 15);
    let default = comprehensive_overview(&store, today, OverviewOptions::default()).unwrap();
    assert_eq!(default.anomalies.len(), 1);

    let strict = comprehensive_overview(
        &store,
        today,
        OverviewOptions {
            anomaly_threshold: 60.0,
        },
    )
    .unwrap();
    assert!(strict.anomalies.is_empty());
}

#[test]
fn bundle_serializes_for_transport() {
    let store = seeded_store();
    let overview =
        comprehensive_overview(&store, date(2026, 8, 15), OverviewOptions::default()).unwrap();
    let value = serde_json::to_value(&overview).expect("serialize bundle");
    for key in [
        "accounts",
        "transactions",
        "summary",
        "expense_breakdown",
        "asset_allocation",
        "income_vs_expense",
        "net_worth_trend",
        "health_score",
        "anomalies",
        "goal_feasibilities",
        "insights",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn snapshots_reproduce_identical_summaries() {
    let store = seeded_store();
    let today = date(2026, 8, 15);
    // Materialize first so the snapshot captures a settled month.
    let original = comprehensive_overview(&store, today, OverviewOptions::default()).unwrap();

    let path = scratch_dir().join("records.json");
    store.save_to_path(&path).expect("save snapshot");
    let restored = MemoryRecordStore::load_from_path(&path).expect("load snapshot");
    assert_eq!(
        restored.list_transactions().unwrap().len(),
        store.list_transactions().unwrap().len()
    );

    let replayed = comprehensive_overview(&restored, today, OverviewOptions::default()).unwrap();
    assert_eq!(replayed.summary, original.summary);
    assert_eq!(replayed.expense_breakdown, original.expense_breakdown);
    assert_eq!(replayed.health_score, original.health_score);
}
