//! budget-consolidator - Reconciled budget statements from decentralized
//! financial records
//!
//! This library consolidates wallet line items, ledger transactions, and
//! per-period account snapshots into reconciled budget statements. It is a
//! pure computation core: document storage, sync feeds, editors, and
//! transports are external collaborators that produce and consume the data
//! structures defined here, delivering one validated mutation at a time.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, wallets, line
//!   items, periods, statements)
//! - `services`: Business logic (group totals ledger, flow classifier,
//!   transaction deriver, balance calculator)
//! - `reports`: Period consolidation into budget statements
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_consolidator::reports::consolidate;
//!
//! let statements = consolidate(&snapshot_records, &expense_records);
//! for statement in &statements {
//!     println!("{} {}: net expense {}", statement.owner_id,
//!         statement.month, statement.net_expense_txns);
//! }
//! ```

pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{ConsolidatorError, ConsolidatorResult};
