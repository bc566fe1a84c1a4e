//! Product catalog module.
//!
//! The catalog is supplied once at startup and never changes during a
//! session. Order is significant: the product grid renders in catalog order.

mod category;
mod product;

pub use category::{Category, CategoryFilter};
pub use product::{Product, PLACEHOLDER_IMAGE};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use std::collections::HashSet;

/// An ordered, immutable list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The default furniture collection.
    pub fn furniture() -> Self {
        let products = vec![
            Product::new(1, "Modern Sofa", Money::from_units(799), Category::LivingRoom)
                .with_description("Comfortable 3-seater sofa with wooden legs and soft fabric."),
            Product::new(2, "Wooden Bed", Money::from_units(999), Category::Bedroom)
                .with_description("Elegant queen-sized bed frame with headboard."),
            Product::new(3, "Dining Table", Money::from_units(599), Category::DiningRoom)
                .with_description("6-seater dining table with matching chairs."),
            Product::new(4, "Office Desk", Money::from_units(499), Category::Office)
                .with_description("Spacious desk with drawer storage for your home office."),
            Product::new(5, "Coffee Table", Money::from_units(349), Category::LivingRoom)
                .with_description("Modern coffee table with tempered glass top."),
            Product::new(6, "Bookshelf", Money::from_units(279), Category::LivingRoom)
                .with_description("5-tier bookshelf with contemporary design."),
            Product::new(7, "Bedside Table", Money::from_units(149), Category::Bedroom)
                .with_description("Compact bedside table with drawer and shelf."),
            Product::new(8, "Ergonomic Chair", Money::from_units(399), Category::Office)
                .with_description("Comfortable ergonomic chair for long working hours."),
        ];
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing `filter`, in catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::furniture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_catalog() {
        let catalog = Catalog::furniture();
        assert_eq!(catalog.len(), 8);

        let sofa = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(sofa.name, "Modern Sofa");
        assert_eq!(sofa.price, Money::from_units(799));
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_furniture_catalog_is_valid() {
        let products = Catalog::furniture().products().to_vec();
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = Catalog::furniture();
        let names: Vec<&str> = catalog
            .filter(CategoryFilter::Only(Category::LivingRoom))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Modern Sofa", "Coffee Table", "Bookshelf"]);

        assert_eq!(catalog.filter(CategoryFilter::All).len(), 8);
    }

    #[test]
    fn test_filter_can_be_empty() {
        let catalog = Catalog::new(vec![Product::new(
            1,
            "Sofa",
            Money::from_units(1),
            Category::LivingRoom,
        )])
        .unwrap();
        assert!(catalog.filter(CategoryFilter::Only(Category::Office)).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Product::new(1, "A", Money::from_units(1), Category::Office),
            Product::new(1, "B", Money::from_units(2), Category::Office),
        ]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id.get() == 1));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Catalog::new(vec![Product::new(
            3,
            "Refund",
            Money::new(-1),
            Category::Office,
        )]);
        assert!(matches!(result, Err(CommerceError::NegativePrice(_))));
    }
}
