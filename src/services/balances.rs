//! Opening/closing balance computation
//!
//! Balances are derived, never edited: for each token the account has ever
//! touched, the opening balance is the signed sum of all transactions
//! strictly before the period start and the closing balance adds the signed
//! sum of transactions inside the (inclusive) period. The token universe is
//! taken from the full history, not just the period, so a token that went
//! quiet still reports its carried balance.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{Balance, Transaction};

/// Compute per-token opening and closing balances over `[start, end]`
///
/// The result replaces an account's balance sets in full (see
/// `Account::apply_balances`); repeated invocation with the same inputs is
/// idempotent.
pub fn calculate_balances(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> BTreeMap<String, Balance> {
    let mut balances: BTreeMap<String, Balance> = BTreeMap::new();

    for transaction in transactions {
        let entry = balances
            .entry(transaction.amount.token.clone())
            .or_default();
        let signed = transaction.signed_value();

        if transaction.datetime < start {
            entry.opening += signed;
            entry.closing += signed;
        } else if transaction.datetime <= end {
            entry.closing += signed;
        }
        // Transactions after the period still register the token (with no
        // contribution), keeping the token universe complete.
    }

    balances
}
