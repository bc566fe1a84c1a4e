//! Product grid.

use archiply_commerce::catalog::Product;

use super::html_escape;

pub const NO_PRODUCTS_MESSAGE: &str = "No products found in this category.";

/// Render the product cards, in the order given.
pub fn render_product_grid(products: &[&Product]) -> String {
    if products.is_empty() {
        return format!(
            r#"<div class="no-products">
    <p>{NO_PRODUCTS_MESSAGE}</p>
</div>"#
        );
    }

    products.iter().map(|p| render_product_card(p)).collect()
}

fn render_product_card(product: &Product) -> String {
    format!(
        r#"<div class="product-card" data-id="{id}">
    <div class="product-img">
        <img src="{image}" alt="{name}">
    </div>
    <div class="product-info">
        <h3 class="product-name">{name}</h3>
        <p class="product-description">{description}</p>
        <p class="product-price">{price}</p>
        <button class="btn add-to-cart" data-id="{id}">Add to Cart</button>
    </div>
</div>
"#,
        id = product.id,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        price = product.price.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use archiply_commerce::catalog::{Catalog, Category, CategoryFilter};
    use archiply_commerce::Money;

    #[test]
    fn test_renders_cards_in_order() {
        let catalog = Catalog::furniture();
        let html = render_product_grid(&catalog.filter(CategoryFilter::All));

        assert_eq!(html.matches(r#"class="product-card""#).count(), 8);
        let sofa = html.find("Modern Sofa").unwrap();
        let chair = html.find("Ergonomic Chair").unwrap();
        assert!(sofa < chair);
        assert!(html.contains(r#"<p class="product-price">$799.00</p>"#));
        assert!(html.contains(r#"<button class="btn add-to-cart" data-id="1">"#));
    }

    #[test]
    fn test_empty_grid() {
        let html = render_product_grid(&[]);
        assert!(html.contains(r#"class="no-products""#));
        assert!(html.contains(NO_PRODUCTS_MESSAGE));
    }

    #[test]
    fn test_escapes_fields() {
        let product = Product::new(9, "Chair <b>", Money::from_units(10), Category::Office)
            .with_description("Oak & steel");
        let html = render_product_grid(&[&product]);
        assert!(html.contains("Chair &lt;b&gt;"));
        assert!(html.contains("Oak &amp; steel"));
    }
}
