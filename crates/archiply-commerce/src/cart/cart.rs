//! Cart and line item types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A line in the cart: one product and how many of it.
///
/// Display fields are copied from the product when the line is created and
/// are not refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product this line holds.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at time of adding.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line holding one unit of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price.saturating_multiply(self.quantity)
    }
}

/// Outcome of taking one unit off a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line is still in the cart with this many units.
    Decreased { remaining: u32 },
    /// The last unit was taken and the line is gone.
    Removed(CartLine),
}

/// A shopping cart.
///
/// Lines keep insertion order, and no two lines share a product id.
/// Serializes as a bare JSON array of lines; deserializing re-checks both
/// line invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<CartLine>", try_from = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from lines, checking quantities, prices and id uniqueness.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if line.price.is_negative() {
                return Err(CommerceError::NegativePrice(line.id));
            }
            if line.quantity == 0 {
                return Err(CommerceError::InvalidQuantity {
                    product_id: line.id,
                    quantity: line.quantity,
                });
            }
            if !seen.insert(line.id) {
                return Err(CommerceError::DuplicateLine(line.id));
            }
        }
        Ok(Self { lines })
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for this product, or appends a new line
    /// with quantity 1.
    pub fn add_one(&mut self, product: &Product) -> Result<&CartLine, CommerceError> {
        match self.position(product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or(CommerceError::Overflow)?;
                Ok(&self.lines[index])
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                let last = self.lines.len() - 1;
                Ok(&self.lines[last])
            }
        }
    }

    /// Take one unit off the line for `id`.
    ///
    /// A line at quantity 1 is removed. Returns `None` if no line exists.
    pub fn remove_one(&mut self, id: ProductId) -> Option<QuantityChange> {
        let index = self.position(id)?;
        if self.lines[index].quantity > 1 {
            let line = &mut self.lines[index];
            line.quantity -= 1;
            Some(QuantityChange::Decreased {
                remaining: line.quantity,
            })
        } else {
            Some(QuantityChange::Removed(self.lines.remove(index)))
        }
    }

    /// Remove the whole line for `id`, whatever its quantity.
    pub fn remove_line(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.position(id)?;
        Some(self.lines.remove(index))
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Snapshot of the cart with every derived figure computed.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|line| LineSummary {
                    id: line.id,
                    name: line.name.clone(),
                    image: line.image.clone(),
                    unit_price: line.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CommerceError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Cart::from_lines(lines)
    }
}
