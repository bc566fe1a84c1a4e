//! Catalog listing.

use anyhow::Result;
use archiply_commerce::catalog::Catalog;

use super::{parse_category, ProductsArgs};
use crate::context::Context;
use crate::output::category_badge;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filter = parse_category(args.category.as_deref())?;
    let catalog = Catalog::furniture();
    let products = catalog.filter(filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    if products.is_empty() {
        ctx.output.info("No products found in this category.");
        return Ok(());
    }

    let widths = [4, 18, 10];
    for product in products {
        let id = product.id.to_string();
        let price = product.price.display();
        ctx.output.table_row(
            &[&id, &product.name, &price, &category_badge(product.category.as_str())],
            &widths,
        );
    }

    Ok(())
}
