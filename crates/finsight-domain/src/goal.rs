//! Domain records for savings goals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

/// A savings target with an optional recurring monthly contribution.
///
/// `current_saved` may exceed `target_amount`; the goal is then achieved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_saved: f64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_amount: Option<f64>,
    #[serde(default)]
    pub priority: u8,
}

impl FinancialGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        target_date: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_saved: 0.0,
            target_date,
            category,
            is_recurring: false,
            recurring_amount: None,
            priority: 0,
        }
    }

    /// Raw completion percentage, unclamped. Zero when the target is zero.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_saved / self.target_amount * 100.0
        } else {
            0.0
        }
    }
}

impl Identifiable for FinancialGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for FinancialGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    EmergencyFund,
    Investment,
    Purchase,
    Retirement,
    Education,
    Travel,
    Freedom,
    Other,
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalCategory::EmergencyFund => "Emergency Fund",
            GoalCategory::Investment => "Investment",
            GoalCategory::Purchase => "Purchase",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::Education => "Education",
            GoalCategory::Travel => "Travel",
            GoalCategory::Freedom => "Freedom",
            GoalCategory::Other => "Other",
        };
        f.write_str(label)
    }
}
