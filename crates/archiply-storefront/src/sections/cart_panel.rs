//! Cart modal contents, badge and total.

use archiply_commerce::cart::{CartSummary, LineSummary};

use super::html_escape;

pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

/// Render the line list of the cart modal.
pub fn render_cart_items(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return format!(
            r#"<div class="empty-cart">
    <p>{EMPTY_CART_TEXT}</p>
</div>"#
        );
    }

    summary.lines.iter().map(render_cart_item).collect()
}

fn render_cart_item(line: &LineSummary) -> String {
    format!(
        r#"<div class="cart-item">
    <div class="item-image">
        <img src="{image}" alt="{name}">
    </div>
    <div class="item-details">
        <h4>{name}</h4>
        <div class="item-price">{subtotal}</div>
        <div class="quantity-controls">
            <button class="quantity-btn minus" data-id="{id}">-</button>
            <span class="quantity">{quantity}</span>
            <button class="quantity-btn plus" data-id="{id}">+</button>
        </div>
    </div>
    <button class="remove-btn" data-id="{id}">&times;</button>
</div>
"#,
        id = line.id,
        image = html_escape(&line.image),
        name = html_escape(&line.name),
        subtotal = line.subtotal_display(),
        quantity = line.quantity,
    )
}

/// Text of the cart icon badge.
pub fn render_cart_count(summary: &CartSummary) -> String {
    summary.item_count.to_string()
}

/// Text of the cart total.
pub fn render_cart_total(summary: &CartSummary) -> String {
    summary.total_display()
}

#[cfg(test)]
mod tests {
    use super::*;
    use archiply_commerce::{Money, ProductId};

    fn sofa_line(quantity: u32) -> LineSummary {
        LineSummary {
            id: ProductId::new(1),
            name: "Modern Sofa".to_string(),
            image: "/api/placeholder/300/200".to_string(),
            unit_price: Money::from_units(799),
            quantity,
            subtotal: Money::from_units(799 * i64::from(quantity)),
        }
    }

    #[test]
    fn test_empty_cart() {
        let summary = CartSummary::default();
        assert!(render_cart_items(&summary).contains(EMPTY_CART_TEXT));
        assert_eq!(render_cart_count(&summary), "0");
        assert_eq!(render_cart_total(&summary), "$0.00");
    }

    #[test]
    fn test_line_markup() {
        let summary = CartSummary {
            lines: vec![sofa_line(2)],
            item_count: 2,
            total: Money::from_units(1598),
        };
        let html = render_cart_items(&summary);

        assert!(html.contains(r#"<div class="item-price">$1598.00</div>"#));
        assert!(html.contains(r#"<span class="quantity">2</span>"#));
        assert!(html.contains(r#"<button class="quantity-btn minus" data-id="1">-</button>"#));
        assert!(html.contains(r#"<button class="remove-btn" data-id="1">&times;</button>"#));
        assert_eq!(render_cart_count(&summary), "2");
        assert_eq!(render_cart_total(&summary), "$1598.00");
    }
}
