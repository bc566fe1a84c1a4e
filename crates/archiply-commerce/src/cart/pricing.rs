//! Derived cart figures for display.
//!
//! A [`CartSummary`] is recomputed from the cart on demand and handed to
//! whatever renders the badge, line list and total. It is never stored.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart with every derived figure computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities (the badge count).
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartSummary {
    /// Check if the summarized cart had no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total formatted for display (e.g. "$1598.00").
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}

/// Display figures for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSummary {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Unit price times quantity.
    pub subtotal: Money,
}

impl LineSummary {
    /// Subtotal formatted for display.
    pub fn subtotal_display(&self) -> String {
        self.subtotal.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.total_display(), "$0.00");
    }

    #[test]
    fn test_subtotal_display() {
        let line = LineSummary {
            id: ProductId::new(1),
            name: "Modern Sofa".to_string(),
            image: String::new(),
            unit_price: Money::from_units(799),
            quantity: 2,
            subtotal: Money::from_units(1598),
        };
        assert_eq!(line.subtotal_display(), "$1598.00");
    }
}
