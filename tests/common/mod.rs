#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

use finsight::domain::{
    Asset, AssetType, FinancialGoal, GoalCategory, Liability, LiabilityType, NewTransaction,
    Transaction, TransactionKind,
};
use finsight::{CoreError, MemoryRecordStore, RecordStore};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Reserves a scratch directory that survives until the test process exits.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn income(name: &str, amount: f64, on: NaiveDate) -> Transaction {
    Transaction::new(name, amount, TransactionKind::Income, "salary", on)
}

pub fn expense(name: &str, amount: f64, category: &str, on: NaiveDate) -> Transaction {
    Transaction::new(name, amount, TransactionKind::Expense, category, on)
}

/// A recurring transaction template anchored at `on`.
pub fn template(
    name: &str,
    amount: f64,
    kind: TransactionKind,
    category: &str,
    on: NaiveDate,
) -> Transaction {
    let mut txn = Transaction::new(name, amount, kind, category, on);
    txn.is_recurring = true;
    txn
}

pub fn sip_asset(name: &str, current_value: f64, monthly: f64) -> Asset {
    let mut asset = Asset::new(name, AssetType::MutualFunds, current_value, current_value);
    asset.is_recurring = true;
    asset.recurring_amount = Some(monthly);
    asset
}

pub fn emi_liability(name: &str, outstanding: f64, emi: f64, due: NaiveDate) -> Liability {
    let mut liability = Liability::new(name, LiabilityType::HomeLoan, outstanding, emi, due);
    liability.is_recurring = true;
    liability
}

pub fn contributing_goal(name: &str, target: f64, saved: f64, monthly: f64) -> FinancialGoal {
    let mut goal = FinancialGoal::new(name, target, date(2028, 1, 1), GoalCategory::Purchase);
    goal.current_saved = saved;
    goal.is_recurring = true;
    goal.recurring_amount = Some(monthly);
    goal
}

/// Store wrapper that fails selected operations, for exercising the
/// engine's error tiers.
pub struct FlakyStore {
    pub inner: MemoryRecordStore,
    pub fail_lists: bool,
    pub fail_creates: bool,
}

impl FlakyStore {
    pub fn wrapping(inner: MemoryRecordStore) -> Self {
        Self {
            inner,
            fail_lists: false,
            fail_creates: false,
        }
    }

    fn refuse<T>(&self, operation: &str) -> Result<T, CoreError> {
        Err(CoreError::Store(format!("injected {operation} failure")))
    }
}

impl RecordStore for FlakyStore {
    fn list_accounts(&self) -> Result<Vec<finsight::domain::Account>, CoreError> {
        if self.fail_lists {
            return self.refuse("list");
        }
        self.inner.list_accounts()
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        if self.fail_lists {
            return self.refuse("list");
        }
        self.inner.list_transactions()
    }

    fn list_assets(&self) -> Result<Vec<Asset>, CoreError> {
        if self.fail_lists {
            return self.refuse("list");
        }
        self.inner.list_assets()
    }

    fn list_liabilities(&self) -> Result<Vec<Liability>, CoreError> {
        if self.fail_lists {
            return self.refuse("list");
        }
        self.inner.list_liabilities()
    }

    fn list_goals(&self) -> Result<Vec<FinancialGoal>, CoreError> {
        if self.fail_lists {
            return self.refuse("list");
        }
        self.inner.list_goals()
    }

    fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, CoreError> {
        if self.fail_creates {
            return self.refuse("create");
        }
        self.inner.create_transaction(new)
    }

    fn update_asset(&self, asset: &Asset) -> Result<(), CoreError> {
        self.inner.update_asset(asset)
    }

    fn update_goal(&self, goal: &FinancialGoal) -> Result<(), CoreError> {
        self.inner.update_goal(goal)
    }
}
