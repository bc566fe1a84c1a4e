//! Page rendering.

use anyhow::{Context as _, Result};
use archiply_storefront::UiEvent;

use super::{parse_category, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let filter = parse_category(args.category.as_deref())?;
    let mut storefront = ctx.storefront()?;
    storefront.handle(UiEvent::FilterCategory(filter));
    let html = storefront.view().to_html();

    match args.output {
        Some(path) => {
            std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path))?;
            ctx.output.success(&format!("Rendered: {}", path));
        }
        None => println!("{}", html),
    }

    Ok(())
}
