//! Newsletter signup.

use anyhow::Result;
use archiply_storefront::UiEvent;

use super::{report, wait, SubscribeArgs};
use crate::context::Context;

/// Run the subscribe command.
pub fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    storefront.handle(UiEvent::SubmitNewsletter(args.email));
    report(ctx, &storefront)?;

    let delay = storefront.config().timings.newsletter_delay();
    wait(ctx, &mut storefront, delay, "Subscribing...");
    report(ctx, &storefront)
}
