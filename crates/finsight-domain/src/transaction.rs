//! Ledger transaction records and creation payloads.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

/// A single ledger entry.
///
/// `amount` is always a non-negative magnitude; direction comes from `kind`.
/// Entries with `is_recurring` set act as templates: the materializer posts
/// non-recurring copies of them each month and never mutates the template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            kind,
            category: category.into(),
            date: Some(date),
            created_at: date,
            is_recurring: false,
        }
    }

    /// The date used for month bucketing: the explicit entry date when set,
    /// otherwise the record's creation date.
    pub fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or(self.created_at)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Payload handed to the store when creating a transaction. The store
/// assigns the id and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

impl NewTransaction {
    pub fn expense(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            kind: TransactionKind::Expense,
            category: category.into(),
            date,
            is_recurring: false,
        }
    }

    pub fn income(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            kind: TransactionKind::Income,
            category: category.into(),
            date,
            is_recurring: false,
        }
    }
}
