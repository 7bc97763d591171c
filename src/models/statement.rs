//! Report records and the consolidated budget statement
//!
//! Snapshot-style records carry accounts (balances and transactions);
//! expense-style records carry wallets (line items and group totals). The
//! two are produced by independent editors and joined by owner and period
//! key into one `BudgetStatement` per `(owner, period)`.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::amount::TokenAmount;
use super::ids::OwnerId;
use super::period;
use super::wallet::Wallet;

/// A balance/transaction report for one owner over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Document id assigned by the external store
    pub id: String,

    /// Owner this report belongs to
    pub owner_id: OwnerId,

    /// Raw ISO period start; may be missing or malformed
    #[serde(default)]
    pub period_start: Option<String>,

    /// Raw ISO period end; may be missing or malformed
    #[serde(default)]
    pub period_end: Option<String>,

    /// Tracked accounts with their transactions and balances
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl SnapshotRecord {
    /// The record's period key, `None` when either date is unusable
    pub fn period_key(&self) -> Option<String> {
        period::period_key(self.period_start.as_deref(), self.period_end.as_deref())
    }
}

/// A line-item/group report for one owner over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Document id assigned by the external store
    pub id: String,

    /// Owner this report belongs to
    pub owner_id: OwnerId,

    /// Raw ISO period start; may be missing or malformed
    #[serde(default)]
    pub period_start: Option<String>,

    /// Raw ISO period end; may be missing or malformed
    #[serde(default)]
    pub period_end: Option<String>,

    /// Wallets with their line items and group totals
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

impl ExpenseRecord {
    /// The record's period key, `None` when either date is unusable
    pub fn period_key(&self) -> Option<String> {
        period::period_key(self.period_start.as_deref(), self.period_end.as_deref())
    }
}

/// One consolidated statement per owner per period
///
/// Derived, never persisted by this crate. A statement is built even when
/// only one report side exists for the period; the missing side is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatement {
    /// Owner the statement belongs to
    pub owner_id: OwnerId,

    /// Join key, `"{start}_{end}"` on calendar dates
    pub period_key: String,

    /// Month label derived from the period start ("SEP2025")
    pub month: String,

    /// Snapshot side: accounts with balances and transactions
    #[serde(default)]
    pub accounts: Vec<Account>,

    /// Expense side: wallets with line items and group totals
    #[serde(default)]
    pub wallets: Vec<Wallet>,

    /// Sum of line-item actuals across every wallet on the expense side
    pub reported_actuals: TokenAmount,

    /// Filtered sum of outbound stablecoin transactions that left the
    /// tracked group (see `reports::net_expense`)
    pub net_expense_txns: TokenAmount,
}
