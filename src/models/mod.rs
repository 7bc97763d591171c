//! Core data models for the consolidation core
//!
//! This module contains all the data structures that represent the domain:
//! accounts, transactions, wallet line items, group totals, reporting
//! periods, and the consolidated budget statement.

pub mod account;
pub mod amount;
pub mod ids;
pub mod line_item;
pub mod period;
pub mod statement;
pub mod transaction;
pub mod wallet;

pub use account::{Account, AccountType, Balance};
pub use amount::TokenAmount;
pub use ids::{AccountId, GroupId, LineItemId, OwnerId, TransactionId};
pub use line_item::{LineItem, LineItemGroup, LineItemTotals};
pub use statement::{BudgetStatement, ExpenseRecord, SnapshotRecord};
pub use transaction::{Direction, FlowType, Transaction};
pub use wallet::{GroupTotals, Wallet, UNCATEGORIZED_LABEL};
