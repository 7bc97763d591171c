//! Period consolidation
//!
//! Joins snapshot-style and expense-style records by `(owner, period key)`
//! and builds one `BudgetStatement` per group. A period with only one
//! report side still produces a statement; partial consolidation is a
//! normal outcome, and the missing half is empty rather than omitted.
//! Records without a usable period key are excluded and logged.

use std::collections::BTreeMap;

use tracing::warn;

use crate::models::period::{month_key, month_sort_key};
use crate::models::{BudgetStatement, ExpenseRecord, OwnerId, SnapshotRecord, TokenAmount};

use super::net_expense::{net_expense_txns, reported_actuals};

/// Consolidation settings
#[derive(Debug, Clone)]
pub struct ConsolidatorOptions {
    /// Token symbol the single-currency metrics are expressed in. The
    /// upstream expense producer guarantees one currency per deployment.
    pub actuals_token: String,
}

impl Default for ConsolidatorOptions {
    fn default() -> Self {
        Self {
            actuals_token: "DAI".to_string(),
        }
    }
}

/// Consolidate with default options
pub fn consolidate(
    snapshots: &[SnapshotRecord],
    expenses: &[ExpenseRecord],
) -> Vec<BudgetStatement> {
    consolidate_with(snapshots, expenses, &ConsolidatorOptions::default())
}

/// Build one consolidated statement per `(owner, period key)`
///
/// When a data source produces duplicates for the same owner and period,
/// the last record scanned wins, making the outcome deterministic in the
/// source ordering. Statements are sorted most-recent-month-first through
/// the fixed month table.
pub fn consolidate_with(
    snapshots: &[SnapshotRecord],
    expenses: &[ExpenseRecord],
    options: &ConsolidatorOptions,
) -> Vec<BudgetStatement> {
    let mut joined: BTreeMap<(OwnerId, String), (Option<&SnapshotRecord>, Option<&ExpenseRecord>)> =
        BTreeMap::new();

    for record in snapshots {
        match record.period_key() {
            Some(key) => {
                joined
                    .entry((record.owner_id.clone(), key))
                    .or_default()
                    .0 = Some(record);
            }
            None => warn!(record = %record.id, "excluding snapshot record without period key"),
        }
    }

    for record in expenses {
        match record.period_key() {
            Some(key) => {
                joined
                    .entry((record.owner_id.clone(), key))
                    .or_default()
                    .1 = Some(record);
            }
            None => warn!(record = %record.id, "excluding expense record without period key"),
        }
    }

    let mut statements: Vec<BudgetStatement> = joined
        .into_iter()
        .map(|((owner_id, period_key), (snapshot, expense))| {
            // The key's first segment is the already-normalized start date,
            // identical on both sides of the join.
            let month = period_key
                .split('_')
                .next()
                .and_then(month_key)
                .unwrap_or_default();

            let accounts = snapshot.map(|s| s.accounts.clone()).unwrap_or_default();
            let wallets = expense.map(|e| e.wallets.clone()).unwrap_or_default();

            let reported = reported_actuals(&wallets);
            let net_expense = net_expense_txns(&accounts);

            BudgetStatement {
                owner_id,
                period_key,
                month,
                accounts,
                wallets,
                reported_actuals: TokenAmount::new(options.actuals_token.clone(), reported),
                net_expense_txns: TokenAmount::new(options.actuals_token.clone(), net_expense),
            }
        })
        .collect();

    statements.sort_by(|a, b| {
        let a_key = month_sort_key(&a.month);
        let b_key = month_sort_key(&b.month);
        b_key
            .cmp(&a_key)
            .then_with(|| a.owner_id.cmp(&b.owner_id))
            .then_with(|| a.period_key.cmp(&b.period_key))
    });
    statements
}
