//! Domain records for owned assets and systematic investment plans.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

/// An owned asset position valued at `current_value`.
///
/// Assets with `is_recurring` and a positive `recurring_amount` describe a
/// SIP: the materializer posts the contribution as an expense each month and
/// grows `current_value` by the same amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub kind: AssetType,
    pub current_value: f64,
    pub purchase_value: f64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_amount: Option<f64>,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        kind: AssetType,
        current_value: f64,
        purchase_value: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            current_value,
            purchase_value,
            is_recurring: false,
            recurring_amount: None,
        }
    }

    /// Unrealized growth since purchase.
    pub fn growth(&self) -> f64 {
        self.current_value - self.purchase_value
    }
}

impl Identifiable for Asset {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Asset {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Gold,
    Crypto,
    Stocks,
    MutualFunds,
    Property,
    Cash,
    FixedDeposit,
    Ppf,
    Other,
}

impl AssetType {
    /// Stable snake_case label matching the store's vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Gold => "gold",
            AssetType::Crypto => "crypto",
            AssetType::Stocks => "stocks",
            AssetType::MutualFunds => "mutual_funds",
            AssetType::Property => "property",
            AssetType::Cash => "cash",
            AssetType::FixedDeposit => "fixed_deposit",
            AssetType::Ppf => "ppf",
            AssetType::Other => "other",
        }
    }

    /// Types counted toward the invested share of net worth.
    pub fn is_invested(self) -> bool {
        matches!(
            self,
            AssetType::Stocks
                | AssetType::MutualFunds
                | AssetType::Crypto
                | AssetType::Gold
                | AssetType::Ppf
                | AssetType::FixedDeposit
        )
    }

    /// Types liquid enough to count toward emergency-fund coverage.
    pub fn is_liquid(self) -> bool {
        matches!(self, AssetType::Cash | AssetType::FixedDeposit)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetType::Gold => "Gold",
            AssetType::Crypto => "Crypto",
            AssetType::Stocks => "Stocks",
            AssetType::MutualFunds => "Mutual Funds",
            AssetType::Property => "Property",
            AssetType::Cash => "Cash",
            AssetType::FixedDeposit => "Fixed Deposit",
            AssetType::Ppf => "PPF",
            AssetType::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&AssetType::MutualFunds).unwrap();
        assert_eq!(json, "\"mutual_funds\"");
        let parsed: AssetType = serde_json::from_str("\"fixed_deposit\"").unwrap();
        assert_eq!(parsed, AssetType::FixedDeposit);
    }

    #[test]
    fn liquidity_and_investment_sets_match_reporting_rules() {
        assert!(AssetType::Cash.is_liquid());
        assert!(AssetType::FixedDeposit.is_liquid());
        assert!(!AssetType::Stocks.is_liquid());
        assert!(AssetType::Stocks.is_invested());
        assert!(!AssetType::Property.is_invested());
        assert!(!AssetType::Cash.is_invested());
    }
}
