//! Wallet model
//!
//! A wallet owns an ordered list of line items, a group catalog, and the
//! per-group running totals maintained by `services::group_totals`. Totals
//! entries are stored as a vector keyed by (unique) group reference so the
//! structure round-trips through JSON documents; the `None` key is the
//! uncategorized bucket.

use serde::{Deserialize, Serialize};

use super::ids::{GroupId, LineItemId};
use super::line_item::{LineItem, LineItemGroup, LineItemTotals};

/// Display label used when a line item has no group or references a group
/// that no longer exists
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Running totals for one group within a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// The group these totals aggregate; `None` is the uncategorized bucket
    #[serde(default)]
    pub group: Option<GroupId>,

    /// Aggregated numeric fields
    pub totals: LineItemTotals,
}

/// A wallet: ordered line items plus their per-group aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Display key (e.g. the wallet's on-chain address)
    pub address: String,

    /// Human-readable name
    pub name: String,

    /// Ordered line items
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Group catalog for label resolution
    #[serde(default)]
    pub groups: Vec<LineItemGroup>,

    /// Per-group running totals, one entry per group reference
    #[serde(default)]
    pub group_totals: Vec<GroupTotals>,

    /// Opaque references to external billing statements
    #[serde(default)]
    pub billing_statements: Vec<String>,
}

impl Wallet {
    /// Create an empty wallet
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            line_items: Vec::new(),
            groups: Vec::new(),
            group_totals: Vec::new(),
            billing_statements: Vec::new(),
        }
    }

    /// Look up a line item by id
    pub fn line_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.line_items.iter().find(|item| &item.id == id)
    }

    /// Look up the totals entry for a group reference
    pub fn totals_for(&self, group: Option<&GroupId>) -> Option<&LineItemTotals> {
        self.group_totals
            .iter()
            .find(|entry| entry.group.as_ref() == group)
            .map(|entry| &entry.totals)
    }

    /// Get the mutable totals entry for a group reference, creating a
    /// zeroed entry on demand
    pub fn totals_entry_mut(&mut self, group: Option<GroupId>) -> &mut LineItemTotals {
        let position = self
            .group_totals
            .iter()
            .position(|entry| entry.group == group);
        let index = match position {
            Some(index) => index,
            None => {
                self.group_totals.push(GroupTotals {
                    group,
                    totals: LineItemTotals::zero(),
                });
                self.group_totals.len() - 1
            }
        };
        &mut self.group_totals[index].totals
    }

    /// Drop the totals entry for a group reference, if present
    pub fn drop_totals_entry(&mut self, group: Option<&GroupId>) {
        self.group_totals.retain(|entry| entry.group.as_ref() != group);
    }

    /// Resolve the display label for a line item's group
    ///
    /// A missing group reference or a reference to a deleted group both
    /// resolve to the uncategorized label, never an error.
    pub fn group_label(&self, item: &LineItem) -> &str {
        item.group
            .as_ref()
            .and_then(|id| self.groups.iter().find(|g| &g.id == id))
            .map(|g| g.label.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_entry_created_on_demand() {
        let mut wallet = Wallet::new("0x1", "Ops");
        assert!(wallet.totals_for(Some(&GroupId::new("ops"))).is_none());

        let entry = wallet.totals_entry_mut(Some(GroupId::new("ops")));
        assert!(entry.is_zero());
        assert_eq!(wallet.group_totals.len(), 1);

        // Second access reuses the entry.
        wallet.totals_entry_mut(Some(GroupId::new("ops")));
        assert_eq!(wallet.group_totals.len(), 1);
    }

    #[test]
    fn test_uncategorized_bucket_is_distinct() {
        let mut wallet = Wallet::new("0x1", "Ops");
        wallet.totals_entry_mut(None);
        wallet.totals_entry_mut(Some(GroupId::new("ops")));
        assert_eq!(wallet.group_totals.len(), 2);
    }

    #[test]
    fn test_group_label_resolution() {
        let mut wallet = Wallet::new("0x1", "Ops");
        wallet
            .groups
            .push(LineItemGroup::new(GroupId::new("ops"), "Operations"));

        let categorized = LineItem::new("li-1".into(), "Payroll", Some(GroupId::new("ops")));
        let uncategorized = LineItem::new("li-2".into(), "Misc", None);
        let orphaned = LineItem::new("li-3".into(), "Legacy", Some(GroupId::new("gone")));

        assert_eq!(wallet.group_label(&categorized), "Operations");
        assert_eq!(wallet.group_label(&uncategorized), UNCATEGORIZED_LABEL);
        assert_eq!(wallet.group_label(&orphaned), UNCATEGORIZED_LABEL);
    }

    #[test]
    fn test_drop_totals_entry() {
        let mut wallet = Wallet::new("0x1", "Ops");
        wallet.totals_entry_mut(Some(GroupId::new("ops")));
        wallet.drop_totals_entry(Some(&GroupId::new("ops")));
        assert!(wallet.group_totals.is_empty());
    }
}
