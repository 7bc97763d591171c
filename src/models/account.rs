//! Ledger account model
//!
//! An account owns an ordered transaction history and two per-token balance
//! sets (starting and ending) for the reporting period. Internal accounts
//! are the only accounts whose history is directly observed; Source,
//! Destination, and External accounts have theirs derived by mirroring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::AccountId;
use super::transaction::Transaction;

/// Role of an account relative to the tracked group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Funds the group (e.g. a protocol treasury)
    Source,
    /// Operational account whose ledger is directly observed
    Internal,
    /// Receives payments out of the group
    Destination,
    /// Anything outside the tracked group
    External,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Internal => write!(f, "Internal"),
            Self::Destination => write!(f, "Destination"),
            Self::External => write!(f, "External"),
        }
    }
}

/// Opening and closing value of one token over a reporting period
///
/// Derived, never independently editable: always recomputed in full from
/// the transaction set (see `services::balances`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    pub opening: Decimal,
    pub closing: Decimal,
}

/// A tracked account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display key, matched case-insensitively against transaction
    /// counterparty addresses
    pub address: String,

    /// Human-readable name
    pub name: String,

    /// Role relative to the tracked group
    pub account_type: AccountType,

    /// Ordered transaction history
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Per-token opening balances for the reporting period
    #[serde(default)]
    pub starting_balances: BTreeMap<String, Decimal>,

    /// Per-token closing balances for the reporting period
    #[serde(default)]
    pub ending_balances: BTreeMap<String, Decimal>,
}

impl Account {
    /// Create an account with an empty history
    pub fn new(
        id: AccountId,
        address: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            name: name.into(),
            account_type,
            transactions: Vec::new(),
            starting_balances: BTreeMap::new(),
            ending_balances: BTreeMap::new(),
        }
    }

    /// Whether this account's ledger is directly observed
    pub fn is_internal(&self) -> bool {
        self.account_type == AccountType::Internal
    }

    /// Case-insensitive address comparison (addresses are hex strings with
    /// inconsistent checksum casing across feeds)
    pub fn matches_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }

    /// Replace the full transaction set
    ///
    /// Re-sync is an idempotent full replacement, never a patch: derived and
    /// re-synced histories carry no per-record identity worth preserving.
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Replace both balance sets in full from a balance-calculator result
    pub fn apply_balances(&mut self, balances: BTreeMap<String, Balance>) {
        self.starting_balances.clear();
        self.ending_balances.clear();
        for (token, balance) in balances {
            self.starting_balances.insert(token.clone(), balance.opening);
            self.ending_balances.insert(token, balance.closing);
        }
    }
}
