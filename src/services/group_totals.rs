//! Group totals ledger
//!
//! Keeps a wallet's per-group totals consistent with line-item membership
//! without recomputing the whole wallet on every mutation: each operation
//! applies the scalar delta it caused. The caller serializes mutations per
//! wallet (single writer, one mutation per document revision).
//!
//! Removal compensates: the removed item's last-known contribution is
//! subtracted from its group before the item is deleted, keeping remove
//! symmetric with add. `set_group_totals` / `remove_group_totals` are the
//! deliberate escape hatch for externally reconciled totals: after an
//! override the invariant is suspended for that group until incremental
//! mutations re-anchor it; `verify_group_totals` reports the divergence.

use rust_decimal::Decimal;

use crate::error::{ConsolidatorError, ConsolidatorResult};
use crate::models::{GroupId, LineItem, LineItemId, LineItemTotals, Wallet};

/// Patch for one numeric line-item field
///
/// `Keep` produces a no-op delta, `Clear` resets the field to zero with a
/// compensating negative delta equal to the previous value, `Set` replaces
/// the value outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPatch {
    #[default]
    Keep,
    Clear,
    Set(Decimal),
}

impl FieldPatch {
    /// The field value after applying this patch to `current`
    pub fn apply(&self, current: Decimal) -> Decimal {
        match self {
            Self::Keep => current,
            Self::Clear => Decimal::ZERO,
            Self::Set(value) => *value,
        }
    }
}

/// Patch for a line item's group assignment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupPatch {
    #[default]
    Keep,
    /// Move the item to the given group
    Assign(GroupId),
    /// Move the item to the uncategorized bucket
    Clear,
}

impl GroupPatch {
    /// The group reference after applying this patch to `current`
    pub fn apply(&self, current: Option<GroupId>) -> Option<GroupId> {
        match self {
            Self::Keep => current,
            Self::Assign(group) => Some(group.clone()),
            Self::Clear => None,
        }
    }
}

/// A strongly-typed update to one line item
///
/// Every field defaults to "leave unchanged"; builders exist for the cases
/// callers actually construct.
#[derive(Debug, Clone, Default)]
pub struct LineItemPatch {
    pub label: Option<String>,
    pub group: GroupPatch,
    pub budget: FieldPatch,
    pub actuals: FieldPatch,
    pub forecast: FieldPatch,
    pub payments: FieldPatch,
}

impl LineItemPatch {
    /// An empty patch (applies no changes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget field
    pub fn budget(mut self, value: Decimal) -> Self {
        self.budget = FieldPatch::Set(value);
        self
    }

    /// Set the actuals field
    pub fn actuals(mut self, value: Decimal) -> Self {
        self.actuals = FieldPatch::Set(value);
        self
    }

    /// Set the forecast field
    pub fn forecast(mut self, value: Decimal) -> Self {
        self.forecast = FieldPatch::Set(value);
        self
    }

    /// Set the payments field
    pub fn payments(mut self, value: Decimal) -> Self {
        self.payments = FieldPatch::Set(value);
        self
    }

    /// Move the item to a group
    pub fn move_to(mut self, group: GroupId) -> Self {
        self.group = GroupPatch::Assign(group);
        self
    }

    /// Move the item to the uncategorized bucket
    pub fn uncategorize(mut self) -> Self {
        self.group = GroupPatch::Clear;
        self
    }

    /// Rename the item
    pub fn relabel(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Add a line item, adding its contribution to its group's totals entry
/// (created on demand)
pub fn add_line_item(wallet: &mut Wallet, item: LineItem) -> ConsolidatorResult<()> {
    if wallet.line_item(&item.id).is_some() {
        return Err(ConsolidatorError::line_item_duplicate(item.id.as_str()));
    }

    let contribution = item.contribution();
    let group = item.group.clone();
    wallet.line_items.push(item);
    *wallet.totals_entry_mut(group) += contribution;
    Ok(())
}

/// Apply a patch to a line item, adjusting group totals by the delta
///
/// Same-group updates apply `next - previous` to one entry; group moves
/// subtract `previous` from the old entry and add `next` to the new one.
pub fn update_line_item(
    wallet: &mut Wallet,
    id: &LineItemId,
    patch: LineItemPatch,
) -> ConsolidatorResult<()> {
    let index = wallet
        .line_items
        .iter()
        .position(|item| &item.id == id)
        .ok_or_else(|| ConsolidatorError::line_item_not_found(id.as_str()))?;

    let (previous, previous_group, next, next_group) = {
        let item = &mut wallet.line_items[index];
        let previous = item.contribution();
        let previous_group = item.group.clone();

        if let Some(label) = patch.label {
            item.label = label;
        }
        item.group = patch.group.apply(item.group.take());
        item.budget = patch.budget.apply(item.budget);
        item.actuals = patch.actuals.apply(item.actuals);
        item.forecast = patch.forecast.apply(item.forecast);
        item.payments = patch.payments.apply(item.payments);

        (previous, previous_group, item.contribution(), item.group.clone())
    };

    if previous_group == next_group {
        *wallet.totals_entry_mut(next_group) += next - previous;
    } else {
        *wallet.totals_entry_mut(previous_group) -= previous;
        *wallet.totals_entry_mut(next_group) += next;
    }
    Ok(())
}

/// Remove a line item, subtracting its last-known contribution from its
/// group's totals entry before deletion
pub fn remove_line_item(wallet: &mut Wallet, id: &LineItemId) -> ConsolidatorResult<LineItem> {
    let index = wallet
        .line_items
        .iter()
        .position(|item| &item.id == id)
        .ok_or_else(|| ConsolidatorError::line_item_not_found(id.as_str()))?;

    let item = wallet.line_items.remove(index);
    *wallet.totals_entry_mut(item.group.clone()) -= item.contribution();
    Ok(item)
}

/// Replace a group's totals entry wholesale, independent of line-item
/// membership
///
/// Escape hatch for totals reconciled from an outside source (e.g. imported
/// billing statements). Suspends the membership invariant for that group
/// until the next incremental mutation.
pub fn set_group_totals(wallet: &mut Wallet, group: Option<GroupId>, totals: LineItemTotals) {
    *wallet.totals_entry_mut(group) = totals;
}

/// Delete a group's totals entry wholesale
pub fn remove_group_totals(wallet: &mut Wallet, group: Option<&GroupId>) {
    wallet.drop_totals_entry(group);
}

/// Report the group references whose stored totals diverge from a fresh
/// recomputation over current line items
///
/// Non-empty output is expected after an external override; anywhere else
/// it indicates a maintenance bug.
pub fn verify_group_totals(wallet: &Wallet) -> Vec<Option<GroupId>> {
    use std::collections::BTreeMap;

    let mut recomputed: BTreeMap<Option<GroupId>, LineItemTotals> = BTreeMap::new();
    for item in &wallet.line_items {
        *recomputed.entry(item.group.clone()).or_default() += item.contribution();
    }

    let mut divergent: Vec<Option<GroupId>> = Vec::new();
    let mut keys: Vec<Option<GroupId>> = recomputed.keys().cloned().collect();
    for entry in &wallet.group_totals {
        if !keys.contains(&entry.group) {
            keys.push(entry.group.clone());
        }
    }
    keys.sort();
    keys.dedup();

    for key in keys {
        let stored = wallet
            .totals_for(key.as_ref())
            .copied()
            .unwrap_or_default();
        let expected = recomputed.get(&key).copied().unwrap_or_default();
        if stored != expected {
            divergent.push(key);
        }
    }
    divergent
}
