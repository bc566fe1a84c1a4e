//! Shopping cart module.
//!
//! Contains the cart state machine, derived pricing figures, and the
//! [`CartManager`] that persists the cart and signals changes.

mod cart;
mod manager;
mod pricing;

pub use cart::{Cart, CartLine, QuantityChange};
pub use manager::{CartEvent, CartManager, CART_STORAGE_KEY};
pub use pricing::{CartSummary, LineSummary};
