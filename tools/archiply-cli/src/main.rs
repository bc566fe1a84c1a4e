//! Archiply CLI - the furniture storefront from a terminal.
//!
//! Commands:
//! - `archiply products` - List the catalog, optionally by category
//! - `archiply cart` - Show and change the persisted cart, check out
//! - `archiply subscribe` - Sign up for the newsletter
//! - `archiply render` - Render the storefront page as HTML
//! - `archiply config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use archiply_observability::{init_logging, LogLevel};
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, ProductsArgs, RenderArgs, SubscribeArgs};

/// Archiply - browse furniture and manage your cart
#[derive(Parser)]
#[command(name = "archiply")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products(ProductsArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Render the storefront page
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    init_logging(&logging);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
