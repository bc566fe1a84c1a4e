//! Cart manager.
//!
//! Owns the in-memory cart and keeps the persisted copy in step with it.
//! Every successful mutation runs the same tail: rewrite the persisted cart
//! in full, then emit [`CartEvent::Changed`] to subscribers. The operations
//! hand back a [`Notification`] for the caller to display instead of
//! displaying anything themselves.

use crate::cart::{Cart, CartLine, CartSummary, QuantityChange};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::notification::Notification;
use archiply_cache::{Cache, KeyValueStore};
use std::fmt;

/// Storage slot holding the persisted cart.
///
/// The value is a JSON array of lines with `price` in integer cents. A cart
/// stored with decimal prices (`799.99`) fails to parse and loads empty; one
/// stored with whole-unit prices (`799`) loads as cents.
pub const CART_STORAGE_KEY: &str = "archiply_cart";

/// Signal emitted after every successful cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart changed; carries the fresh derived figures.
    Changed(CartSummary),
}

type Subscriber = Box<dyn FnMut(&CartEvent)>;

/// Owns the cart, persists it, and signals changes.
pub struct CartManager<S> {
    cart: Cart,
    catalog: Catalog,
    cache: Cache<S>,
    storage_key: String,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Create a manager using the default storage key, restoring any
    /// persisted cart.
    pub fn load(catalog: Catalog, store: S) -> Self {
        Self::load_with_key(catalog, store, CART_STORAGE_KEY)
    }

    /// Create a manager persisting under `storage_key`.
    ///
    /// A missing, unreadable or invalid persisted cart yields an empty cart;
    /// the failure is logged and not returned.
    pub fn load_with_key(catalog: Catalog, store: S, storage_key: impl Into<String>) -> Self {
        let cache = Cache::new(store);
        let storage_key = storage_key.into();
        let cart = restore(&cache, &storage_key);
        Self {
            cart,
            catalog,
            cache,
            storage_key,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback run after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CartEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add one unit of a catalog product.
    ///
    /// Returns the updated line, or [`CommerceError::ProductNotFound`] with
    /// the cart untouched.
    pub fn try_add(&mut self, id: ProductId) -> Result<&CartLine, CommerceError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        let quantity = self.cart.add_one(product)?.quantity;
        tracing::debug!(product_id = %id, quantity, "added to cart");

        self.commit();
        self.cart.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Add one unit of a catalog product and describe the outcome.
    ///
    /// Unknown products produce an error notification and no mutation.
    pub fn add(&mut self, id: ProductId) -> Notification {
        match self.try_add(id) {
            Ok(line) => Notification::success(format!("{} added to cart!", line.name)),
            Err(CommerceError::ProductNotFound(_)) => {
                tracing::warn!(product_id = %id, "add requested for unknown product");
                Notification::error("Product not found")
            }
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "add failed");
                Notification::error(e.to_string())
            }
        }
    }

    /// Take one unit of a product out of the cart.
    ///
    /// A line at quantity 1 is deleted. Returns `None`, without persisting
    /// or signalling, when the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> Option<Notification> {
        match self.cart.remove_one(id)? {
            QuantityChange::Decreased { remaining } => {
                tracing::debug!(product_id = %id, remaining, "decremented cart line");
            }
            QuantityChange::Removed(_) => {
                tracing::debug!(product_id = %id, "removed last unit of cart line");
            }
        }
        self.commit();
        Some(Notification::info("Item removed from cart"))
    }

    /// Delete a product's line regardless of quantity.
    ///
    /// Returns `None` when the product is not in the cart.
    pub fn remove_all(&mut self, id: ProductId) -> Option<Notification> {
        let line = self.cart.remove_line(id)?;
        tracing::debug!(product_id = %id, quantity = line.quantity, "removed cart line");
        self.commit();
        Some(Notification::info(format!("{} removed from cart", line.name)))
    }

    /// Empty the cart. Produces no notification.
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("cleared cart");
        self.commit();
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Grand total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Fresh derived figures for rendering.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// The catalog products are looked up in.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The persistence store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    fn commit(&mut self) {
        if let Err(e) = self.cache.set(&self.storage_key, &self.cart) {
            tracing::error!(key = %self.storage_key, error = %e, "failed to persist cart");
        }

        let event = CartEvent::Changed(self.cart.summary());
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

fn restore<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> Cart {
    match cache.get::<Cart>(key) {
        Ok(Some(cart)) => {
            tracing::debug!(key, lines = cart.unique_item_count(), "restored persisted cart");
            cart
        }
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable persisted cart");
            Cart::new()
        }
    }
}

impl<S> fmt::Debug for CartManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("storage_key", &self.storage_key)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
