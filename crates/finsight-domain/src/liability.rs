//! Domain records for outstanding debts and their EMI schedules.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

/// A debt with a fixed monthly installment.
///
/// `outstanding_amount` is maintained by the user or the store backend;
/// posting an EMI expense does not reduce it here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Liability {
    pub id: Uuid,
    pub name: String,
    pub kind: LiabilityType,
    pub outstanding_amount: f64,
    pub emi_amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
}

impl Liability {
    pub fn new(
        name: impl Into<String>,
        kind: LiabilityType,
        outstanding_amount: f64,
        emi_amount: f64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            outstanding_amount,
            emi_amount,
            due_date,
            is_recurring: false,
        }
    }
}

impl Identifiable for Liability {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Liability {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityType {
    PersonalLoan,
    HomeLoan,
    CarLoan,
    EducationLoan,
    Emi,
    CreditCard,
    Other,
}

impl fmt::Display for LiabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LiabilityType::PersonalLoan => "Personal Loan",
            LiabilityType::HomeLoan => "Home Loan",
            LiabilityType::CarLoan => "Car Loan",
            LiabilityType::EducationLoan => "Education Loan",
            LiabilityType::Emi => "EMI",
            LiabilityType::CreditCard => "Credit Card",
            LiabilityType::Other => "Other",
        };
        f.write_str(label)
    }
}
