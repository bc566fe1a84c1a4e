//! Archiply storefront page.
//!
//! Everything the furniture storefront does around its cart, as plain state:
//! - **Storefront**: the page context; UI events in, rendered view out
//! - **Scheduler**: virtual-time timers behind every delayed transition
//! - **Widgets**: notification toasts, cart modal, mobile nav, testimonial slider
//! - **Forms**: newsletter signup and simulated checkout
//! - **Sections**: HTML for the product grid, cart, toasts and slider
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use archiply_cache::MemoryStore;
//! use archiply_commerce::catalog::Catalog;
//! use archiply_commerce::ProductId;
//! use archiply_storefront::{Storefront, StorefrontConfig, UiEvent};
//!
//! let mut storefront =
//!     Storefront::new(StorefrontConfig::default(), Catalog::furniture(), MemoryStore::new());
//!
//! storefront.handle(UiEvent::AddToCart(ProductId::new(1)));
//! storefront.handle(UiEvent::Checkout);
//! storefront.tick(Duration::from_secs(2));
//!
//! assert!(storefront.cart().cart().is_empty());
//! assert_eq!(
//!     storefront.notification().unwrap().notification.message,
//!     "Order placed successfully!"
//! );
//! ```

pub mod checkout;
pub mod config;
pub mod data;
pub mod newsletter;
pub mod notifications;
pub mod scheduler;
pub mod sections;
mod storefront;
pub mod widgets;

pub use config::{StorageConfig, StorefrontConfig, TimingConfig};
pub use storefront::{CartView, PageView, Storefront, UiEvent};
