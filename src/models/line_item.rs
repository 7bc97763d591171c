//! Wallet line items, groups, and per-group totals
//!
//! Line items carry four numeric fields (budget, actuals, forecast,
//! payments) and belong to at most one group; `None` means uncategorized.
//! `LineItemTotals` is the four-field aggregate maintained incrementally by
//! `services::group_totals`; its arithmetic operators exist so delta
//! application reads as plain addition and subtraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::amount::lenient;
use super::ids::{GroupId, LineItemId};

/// Aggregate of the four line-item numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItemTotals {
    #[serde(with = "lenient", default)]
    pub budget: Decimal,
    #[serde(with = "lenient", default)]
    pub actuals: Decimal,
    #[serde(with = "lenient", default)]
    pub forecast: Decimal,
    #[serde(with = "lenient", default)]
    pub payments: Decimal,
}

impl LineItemTotals {
    /// A zero aggregate
    pub const fn zero() -> Self {
        Self {
            budget: Decimal::ZERO,
            actuals: Decimal::ZERO,
            forecast: Decimal::ZERO,
            payments: Decimal::ZERO,
        }
    }

    /// Check if every field is zero
    pub fn is_zero(&self) -> bool {
        self.budget.is_zero()
            && self.actuals.is_zero()
            && self.forecast.is_zero()
            && self.payments.is_zero()
    }
}

impl Add for LineItemTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            budget: self.budget + other.budget,
            actuals: self.actuals + other.actuals,
            forecast: self.forecast + other.forecast,
            payments: self.payments + other.payments,
        }
    }
}

impl AddAssign for LineItemTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for LineItemTotals {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            budget: self.budget - other.budget,
            actuals: self.actuals - other.actuals,
            forecast: self.forecast - other.forecast,
            payments: self.payments - other.payments,
        }
    }
}

impl SubAssign for LineItemTotals {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for LineItemTotals {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl Sum for LineItemTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, t| acc + t)
    }
}

/// A budget line item owned by exactly one wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier
    pub id: LineItemId,

    /// Display label
    pub label: String,

    /// Owning group; `None` means uncategorized
    #[serde(default)]
    pub group: Option<GroupId>,

    #[serde(with = "lenient", default)]
    pub budget: Decimal,
    #[serde(with = "lenient", default)]
    pub actuals: Decimal,
    #[serde(with = "lenient", default)]
    pub forecast: Decimal,
    #[serde(with = "lenient", default)]
    pub payments: Decimal,
}

impl LineItem {
    /// Create a line item with zeroed numeric fields
    pub fn new(id: LineItemId, label: impl Into<String>, group: Option<GroupId>) -> Self {
        Self {
            id,
            label: label.into(),
            group,
            budget: Decimal::ZERO,
            actuals: Decimal::ZERO,
            forecast: Decimal::ZERO,
            payments: Decimal::ZERO,
        }
    }

    /// The item's contribution to its group's totals
    pub fn contribution(&self) -> LineItemTotals {
        LineItemTotals {
            budget: self.budget,
            actuals: self.actuals,
            forecast: self.forecast,
            payments: self.payments,
        }
    }
}

/// A named grouping of line items, optionally nested under a parent
///
/// Deleting a group does not cascade to its line items; orphaned group
/// references resolve to the uncategorized display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemGroup {
    /// Unique identifier
    pub id: GroupId,

    /// Display label
    pub label: String,

    /// Parent group for hierarchical display
    #[serde(default)]
    pub parent_id: Option<GroupId>,
}

impl LineItemGroup {
    /// Create a top-level group
    pub fn new(id: GroupId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            parent_id: None,
        }
    }
}
