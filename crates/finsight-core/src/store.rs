//! Boundary contract with the external record store.

use finsight_domain::{Account, Asset, FinancialGoal, Liability, NewTransaction, Transaction};

use crate::CoreError;

/// Abstraction over the per-user record store that feeds the engine.
///
/// Implementations are scoped to the authenticated caller by the backend;
/// every call either returns records or fails with a [`CoreError`] the
/// caller can propagate. The engine holds no store data between
/// invocations.
pub trait RecordStore: Send + Sync {
    fn list_accounts(&self) -> Result<Vec<Account>, CoreError>;
    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
    fn list_assets(&self) -> Result<Vec<Asset>, CoreError>;
    fn list_liabilities(&self) -> Result<Vec<Liability>, CoreError>;
    fn list_goals(&self) -> Result<Vec<FinancialGoal>, CoreError>;

    /// Persists a new ledger entry and returns the stored record.
    fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, CoreError>;

    /// Replaces the stored asset carrying the same id.
    fn update_asset(&self, asset: &Asset) -> Result<(), CoreError>;

    /// Replaces the stored goal carrying the same id.
    fn update_goal(&self, goal: &FinancialGoal) -> Result<(), CoreError>;
}
