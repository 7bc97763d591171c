//! Business logic layer
//!
//! All services are pure, synchronous transformations over in-memory
//! collections: no threading, no I/O, no external calls. The group totals
//! ledger is the one component with cross-call state (a wallet's running
//! totals) and relies on the caller serializing mutations per wallet.

pub mod balances;
pub mod classifier;
pub mod deriver;
pub mod group_totals;

pub use balances::calculate_balances;
pub use classifier::{classify, classify_account, Classification, FlowPolicy, StandardFlowPolicy};
pub use deriver::derive_transactions;
pub use group_totals::{
    add_line_item, remove_group_totals, remove_line_item, set_group_totals, update_line_item,
    verify_group_totals, FieldPatch, GroupPatch, LineItemPatch,
};
