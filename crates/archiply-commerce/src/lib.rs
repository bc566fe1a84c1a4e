//! Catalog and cart logic for the Archiply furniture storefront.
//!
//! - **Catalog**: products, categories, category filtering
//! - **Cart**: line items keyed by product, insertion-ordered
//! - **Cart manager**: the cart plus its persisted mirror and change signal
//! - **Notifications**: messages for the caller to display
//!
//! # Example
//!
//! ```rust
//! use archiply_cache::MemoryStore;
//! use archiply_commerce::prelude::*;
//!
//! let mut manager = CartManager::load(Catalog::furniture(), MemoryStore::new());
//!
//! let notification = manager.add(ProductId::new(1));
//! assert_eq!(notification.message, "Modern Sofa added to cart!");
//!
//! manager.add(ProductId::new(1));
//! assert_eq!(manager.total().display(), "$1598.00");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod notification;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use notification::{Notification, Severity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::notification::{Notification, Severity};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartLine, CartManager, CartSummary, LineSummary, QuantityChange,
        CART_STORAGE_KEY,
    };
}
