//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;
pub mod render;
pub mod subscribe;

use std::time::Duration;

use anyhow::{bail, Result};
use archiply_cache::FileStore;
use archiply_commerce::catalog::{Category, CategoryFilter};
use archiply_commerce::{ProductId, Severity};
use archiply_storefront::Storefront;
use clap::{Args, Subcommand};

use crate::context::Context;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list this category (living-room, bedroom, dining-room, office).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and total.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product ID.
        id: ProductId,
    },
    /// Remove one unit of a product.
    Remove {
        /// Product ID.
        id: ProductId,
    },
    /// Remove a product's line entirely.
    RemoveAll {
        /// Product ID.
        id: ProductId,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Place an order for everything in the cart.
    Checkout,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Category filter applied to the product grid.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output file path (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Parse a `--category` value.
pub fn parse_category(value: Option<&str>) -> Result<CategoryFilter> {
    let Some(value) = value else {
        return Ok(CategoryFilter::All);
    };
    match CategoryFilter::parse(value) {
        Some(filter) => Ok(filter),
        None => {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            bail!(
                "Unknown category: {} (expected all, {})",
                value,
                known.join(", ")
            )
        }
    }
}

/// Print the notification the last event produced. Error notifications
/// become command failures.
pub fn report(ctx: &Context, storefront: &Storefront<FileStore>) -> Result<()> {
    let Some(toast) = storefront.notification() else {
        return Ok(());
    };
    let notification = &toast.notification;
    if notification.severity == Severity::Error {
        bail!("{}", notification.message);
    }
    ctx.output.notification(notification);
    Ok(())
}

/// Sit out a simulated delay, then let the storefront catch up.
pub fn wait(ctx: &Context, storefront: &mut Storefront<FileStore>, delay: Duration, msg: &str) {
    let spinner = ctx.output.spinner(msg);
    std::thread::sleep(delay);
    storefront.tick(delay);
    spinner.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None).unwrap(), CategoryFilter::All);
        assert_eq!(parse_category(Some("all")).unwrap(), CategoryFilter::All);
        assert_eq!(
            parse_category(Some("dining-room")).unwrap(),
            CategoryFilter::Only(Category::DiningRoom)
        );

        let err = parse_category(Some("garage")).unwrap_err().to_string();
        assert!(err.contains("Unknown category: garage"));
        assert!(err.contains("living-room, bedroom, dining-room, office"));
    }
}
