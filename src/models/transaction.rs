//! Ledger transaction model
//!
//! Transactions on Internal accounts are synced from an external ledger
//! feed; every other account type gets its history derived by mirroring
//! (see `services::deriver`). A transaction is immutable once classified
//! and stored: a re-sync replaces the full set for an account within a
//! period rather than patching individual records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::TokenAmount;
use super::ids::{AccountId, TransactionId};

/// Direction of value movement relative to the owning account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Inflow,
    Outflow,
}

impl Direction {
    /// The opposite direction, used when mirroring a transaction onto its
    /// counterparty account
    pub fn flipped(&self) -> Self {
        match self {
            Self::Inflow => Self::Outflow,
            Self::Outflow => Self::Inflow,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "INFLOW"),
            Self::Outflow => write!(f, "OUTFLOW"),
        }
    }
}

/// Classification of a transaction relative to the tracked group of accounts
///
/// The downstream contract:
/// - `Internal`: movement stays entirely within the tracked group; always
///   excluded from "leaves the group" expense metrics.
/// - `Swap`: same-entity token conversion; always excluded from expense
///   metrics even when the amount is large.
/// - `External`, `TopUp`, `Return`: value crossing the group boundary;
///   counted when the direction is outflow, excluded when inflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowType {
    Internal,
    External,
    TopUp,
    Return,
    Swap,
}

impl FlowType {
    /// Whether this flow type represents value crossing the tracked-group
    /// boundary (as opposed to moving or converting within it)
    pub fn leaves_group(&self) -> bool {
        matches!(self, Self::External | Self::TopUp | Self::Return)
    }
}

/// A single ledger transaction owned by one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// External reference (e.g. on-chain transaction hash)
    pub transaction_id: String,

    /// Counterparty address, when the feed reports one
    #[serde(default)]
    pub counter_party: Option<String>,

    /// Weak reference to a tracked counterparty account, resolved by
    /// address match during classification
    #[serde(default)]
    pub counter_party_account_id: Option<AccountId>,

    /// Token and decimal value
    pub amount: TokenAmount,

    /// When the transaction settled
    pub datetime: DateTime<Utc>,

    /// Direction relative to the owning account
    pub direction: Direction,

    /// Flow classification; `None` until classified
    #[serde(default)]
    pub flow_type: Option<FlowType>,
}

impl Transaction {
    /// Create an unclassified transaction as delivered by the sync feed
    pub fn new(
        transaction_id: impl Into<String>,
        amount: TokenAmount,
        datetime: DateTime<Utc>,
        direction: Direction,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            transaction_id: transaction_id.into(),
            counter_party: None,
            counter_party_account_id: None,
            amount,
            datetime,
            direction,
            flow_type: None,
        }
    }

    /// Set the counterparty address (builder style)
    pub fn with_counter_party(mut self, address: impl Into<String>) -> Self {
        self.counter_party = Some(address.into());
        self
    }

    /// The amount signed by direction: positive inflow, negative outflow
    pub fn signed_value(&self) -> rust_decimal::Decimal {
        self.amount.signed(self.direction)
    }
}
