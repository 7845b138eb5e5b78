//! finsight-domain
//!
//! Pure domain records (accounts, transactions, assets, liabilities, goals)
//! plus the derived report types the analytics engine produces.
//! No I/O, no storage. Only data types and enums.

pub mod account;
pub mod asset;
pub mod common;
pub mod goal;
pub mod liability;
pub mod reports;
pub mod transaction;

pub use account::*;
pub use asset::*;
pub use common::*;
pub use goal::*;
pub use liability::*;
pub use reports::*;
pub use transaction::*;
