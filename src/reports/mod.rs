//! Consolidated reporting
//!
//! Builds one budget statement per owner per reporting period from the
//! independently-edited snapshot and expense report documents.

pub mod consolidator;
pub mod net_expense;

pub use consolidator::{consolidate, consolidate_with, ConsolidatorOptions};
pub use net_expense::{is_stablecoin, net_expense_txns, reported_actuals, STABLECOINS};
