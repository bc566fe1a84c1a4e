//! Cart commands.

use anyhow::Result;
use archiply_storefront::UiEvent;
use dialoguer::Confirm;

use super::{report, wait, CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(ctx),
        CartCommand::Add { id } => apply(ctx, UiEvent::AddToCart(id)),
        CartCommand::Remove { id } => apply(ctx, UiEvent::DecrementQuantity(id)),
        CartCommand::RemoveAll { id } => apply(ctx, UiEvent::RemoveLine(id)),
        CartCommand::Clear { yes } => clear_cart(yes, ctx),
        CartCommand::Checkout => checkout(ctx),
    }
}

fn show_cart(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let summary = storefront.cart().summary();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Cart");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [4, 4, 18, 10];
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &line.id.to_string(),
                &format!("{}x", line.quantity),
                &line.name,
                &line.subtotal_display(),
            ],
            &widths,
        );
    }
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Total", &summary.total_display());

    Ok(())
}

fn apply(ctx: &Context, event: UiEvent) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    let before = storefront.cart_view().renders;
    storefront.handle(event);

    if storefront.cart_view().renders == before && storefront.notification().is_none() {
        ctx.output.warn("That product is not in the cart");
        return Ok(());
    }
    report(ctx, &storefront)?;
    ctx.output.kv("Total", &storefront.cart_view().total_text);
    Ok(())
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    if storefront.cart().cart().is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from the cart?",
                storefront.cart().item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    storefront.cart_mut().clear();
    ctx.output.success("Cart cleared");
    Ok(())
}

fn checkout(ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    storefront.handle(UiEvent::Checkout);
    report(ctx, &storefront)?;

    let delay = storefront.config().timings.checkout_delay();
    wait(ctx, &mut storefront, delay, "Processing your order...");
    report(ctx, &storefront)
}
