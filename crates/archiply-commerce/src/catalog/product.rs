//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image shown when a product has no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, never negative.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Room category.
    pub category: Category,
    /// Short description for listings.
    pub description: String,
}

impl Product {
    /// Create a product with the placeholder image and no description.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: PLACEHOLDER_IMAGE.to_string(),
            category,
            description: String::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
