//! finsight-storage-memory
//!
//! In-memory implementation of the engine's record store contract, plus
//! JSON snapshot persistence for fixtures and demos. Production hosts are
//! expected to bring their own multi-tenant backend; this crate is the
//! reference implementation the test suites run against.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finsight_core::{CoreError, RecordStore};
use finsight_domain::{Account, Asset, FinancialGoal, Liability, NewTransaction, Transaction};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Collections {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    assets: Vec<Asset>,
    liabilities: Vec<Liability>,
    goals: Vec<FinancialGoal>,
}

/// Mutex-guarded store holding one caller's records.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    inner: Mutex<Collections>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_account(&self, account: Account) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.accounts.push(account);
        }
    }

    pub fn insert_transaction(&self, transaction: Transaction) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.transactions.push(transaction);
        }
    }

    pub fn insert_asset(&self, asset: Asset) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.assets.push(asset);
        }
    }

    pub fn insert_liability(&self, liability: Liability) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.liabilities.push(liability);
        }
    }

    pub fn insert_goal(&self, goal: FinancialGoal) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.goals.push(goal);
        }
    }

    /// Writes a pretty-printed JSON snapshot of every collection, via a
    /// temp file and rename so a crash never truncates an existing one.
    pub fn save_to_path(&self, path: &Path) -> Result<(), CoreError> {
        let snapshot = self.lock()?.clone();
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|err| CoreError::Store(err.to_string()))?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path).map_err(|err| CoreError::Store(err.to_string()))?;
        Ok(())
    }

    /// Loads a snapshot previously written by [`Self::save_to_path`].
    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        let data = fs::read_to_string(path).map_err(|err| CoreError::Store(err.to_string()))?;
        let collections: Collections =
            serde_json::from_str(&data).map_err(|err| CoreError::Store(err.to_string()))?;
        Ok(Self {
            inner: Mutex::new(collections),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, CoreError> {
        self.inner
            .lock()
            .map_err(|_| CoreError::Store("record store mutex poisoned".into()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn list_accounts(&self) -> Result<Vec<Account>, CoreError> {
        Ok(self.lock()?.accounts.clone())
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.lock()?.transactions.clone())
    }

    fn list_assets(&self) -> Result<Vec<Asset>, CoreError> {
        Ok(self.lock()?.assets.clone())
    }

    fn list_liabilities(&self) -> Result<Vec<Liability>, CoreError> {
        Ok(self.lock()?.liabilities.clone())
    }

    fn list_goals(&self) -> Result<Vec<FinancialGoal>, CoreError> {
        Ok(self.lock()?.goals.clone())
    }

    fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, CoreError> {
        if new.amount < 0.0 {
            return Err(CoreError::Validation(
                "transaction amount must be non-negative".into(),
            ));
        }
        let stored = Transaction {
            id: Uuid::new_v4(),
            name: new.name,
            amount: new.amount,
            kind: new.kind,
            category: new.category,
            date: Some(new.date),
            created_at: new.date,
            is_recurring: new.is_recurring,
        };
        self.lock()?.transactions.push(stored.clone());
        Ok(stored)
    }

    fn update_asset(&self, asset: &Asset) -> Result<(), CoreError> {
        let mut inner = self.lock()?;
        match inner.assets.iter_mut().find(|stored| stored.id == asset.id) {
            Some(stored) => {
                *stored = asset.clone();
                Ok(())
            }
            None => Err(CoreError::NotFound(asset.id)),
        }
    }

    fn update_goal(&self, goal: &FinancialGoal) -> Result<(), CoreError> {
        let mut inner = self.lock()?;
        match inner.goals.iter_mut().find(|stored| stored.id == goal.id) {
            Some(stored) => {
                *stored = goal.clone();
                Ok(())
            }
            None => Err(CoreError::NotFound(goal.id)),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| CoreError::Store(err.to_string()))?;
    }
    let mut file = fs::File::create(path).map_err(|err| CoreError::Store(err.to_string()))?;
    file.write_all(data.as_bytes())
        .map_err(|err| CoreError::Store(err.to_string()))?;
    file.flush().map_err(|err| CoreError::Store(err.to_string()))?;
    Ok(())
}
