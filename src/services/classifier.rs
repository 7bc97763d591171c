//! Flow classification
//!
//! Assigns a `FlowType` to each transaction on an Internal account given
//! the full account topology. The decision tree for resolved counterparties
//! is a business rule that differs between deployments, so it lives behind
//! the `FlowPolicy` trait; `StandardFlowPolicy` is the default tree.
//!
//! Whatever the policy, the downstream contract is fixed: `Internal` means
//! the movement never left the tracked group, `Swap` is a same-entity token
//! conversion, and `External`/`TopUp`/`Return` cross the group boundary.

use crate::models::{Account, AccountId, AccountType, Direction, FlowType, Transaction};

/// Result of classifying one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Assigned flow type
    pub flow_type: FlowType,

    /// The tracked account the counterparty address resolved to, when it
    /// resolved at all
    pub counter_party_account_id: Option<AccountId>,
}

/// Pluggable classification rule
pub trait FlowPolicy {
    /// Classify `transaction`, owned by `owner`, against the tracked set
    fn classify(
        &self,
        transaction: &Transaction,
        owner: &Account,
        accounts: &[Account],
    ) -> Classification;
}

/// Default classification tree
///
/// - counterparty address equals the owner's own address: `Swap`
///   (same-entity token conversion);
/// - resolves to a tracked Internal account: `Internal`;
/// - resolves to a tracked Source account: `TopUp` on inflow, `Return` on
///   outflow (funding received from, or handed back to, the source);
/// - resolves to a tracked Destination or External account, or does not
///   resolve at all: `External`.
///
/// Address matching is case-insensitive. The counterparty account id is
/// populated exactly when the address resolves to a tracked account.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFlowPolicy;

impl FlowPolicy for StandardFlowPolicy {
    fn classify(
        &self,
        transaction: &Transaction,
        owner: &Account,
        accounts: &[Account],
    ) -> Classification {
        let counter_party = match transaction.counter_party.as_deref() {
            Some(address) if !address.is_empty() => address,
            _ => {
                return Classification {
                    flow_type: FlowType::External,
                    counter_party_account_id: None,
                }
            }
        };

        if owner.matches_address(counter_party) {
            return Classification {
                flow_type: FlowType::Swap,
                counter_party_account_id: Some(owner.id.clone()),
            };
        }

        let resolved = accounts.iter().find(|a| a.matches_address(counter_party));
        let Some(counter_account) = resolved else {
            return Classification {
                flow_type: FlowType::External,
                counter_party_account_id: None,
            };
        };

        let flow_type = match counter_account.account_type {
            AccountType::Internal => FlowType::Internal,
            AccountType::Source => match transaction.direction {
                Direction::Inflow => FlowType::TopUp,
                Direction::Outflow => FlowType::Return,
            },
            AccountType::Destination | AccountType::External => FlowType::External,
        };

        Classification {
            flow_type,
            counter_party_account_id: Some(counter_account.id.clone()),
        }
    }
}

/// Classify a transaction with the default policy
pub fn classify(
    transaction: &Transaction,
    owner: &Account,
    accounts: &[Account],
) -> Classification {
    StandardFlowPolicy.classify(transaction, owner, accounts)
}

/// Classify every transaction on an Internal account in place, recording
/// both the flow type and the resolved counterparty reference
pub fn classify_account<P: FlowPolicy>(policy: &P, owner: &mut Account, accounts: &[Account]) {
    let snapshot = owner.clone();
    for transaction in &mut owner.transactions {
        let classification = policy.classify(transaction, &snapshot, accounts);
        transaction.flow_type = Some(classification.flow_type);
        transaction.counter_party_account_id = classification.counter_party_account_id;
    }
}
