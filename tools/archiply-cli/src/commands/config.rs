//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use archiply_observability::{LogFormat, LogLevel};
use archiply_storefront::data::TestimonialsContent;
use archiply_storefront::StorefrontConfig;
use serde::de::DeserializeOwned;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv("testimonial_count", &ctx.config.testimonial_count.to_string());

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("key", &ctx.config.storage.key);
    ctx.output.kv("dir", &ctx.storage_dir().display().to_string());

    ctx.output.info("");
    ctx.output.info("[timings]");
    for key in TIMING_KEYS {
        ctx.output.kv(key, &get_config_value(&ctx.config, &format!("timings.{key}"))?);
    }

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_str());
    ctx.output.kv("format", &get_config_value(&ctx.config, "logging.format")?);
    if let Some(ref filter) = ctx.config.logging.filter {
        ctx.output.kv("filter", filter);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = &ctx.config_path else {
        bail!("No config file found. Run `archiply config init` to create one.");
    };

    // Reload from disk so only the one key changes
    let mut config = StorefrontConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(config_path)?;
    tracing::info!(key, value, path = %config_path.display(), "config value updated");

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    StorefrontConfig::default().save(&config_path)?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Returns `(errors, warnings)`.
fn check_config(config: &StorefrontConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // The key doubles as a file name in the storage directory
    let key = &config.storage.key;
    let key_ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !key_ok {
        errors.push(format!(
            "storage.key '{}' must be non-empty ASCII letters, digits, '_', '-' or '.', not starting with '.'",
            key
        ));
    }

    let available = TestimonialsContent::default().len();
    if config.testimonial_count > available {
        warnings.push(format!(
            "testimonial_count is {} but only {} testimonials exist",
            config.testimonial_count, available
        ));
    }

    let timings = &config.timings;
    if timings.carousel_interval_ms == 0 {
        warnings.push("timings.carousel_interval_ms of 0 is raised to 1".to_string());
    }
    if timings.notification_ms <= timings.enter_ms {
        warnings.push(
            "timings.notification_ms should exceed timings.enter_ms or toasts never show"
                .to_string(),
        );
    }

    (errors, warnings)
}

const TIMING_KEYS: [&str; 6] = [
    "notification_ms",
    "enter_ms",
    "exit_ms",
    "carousel_interval_ms",
    "checkout_delay_ms",
    "newsletter_delay_ms",
];

fn get_config_value(config: &StorefrontConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let timings = &config.timings;

    match parts.as_slice() {
        ["testimonial_count"] => Ok(config.testimonial_count.to_string()),
        ["storage", "key"] => Ok(config.storage.key.clone()),
        ["storage", "dir"] => Ok(config.storage.dir.display().to_string()),
        ["timings", "notification_ms"] => Ok(timings.notification_ms.to_string()),
        ["timings", "enter_ms"] => Ok(timings.enter_ms.to_string()),
        ["timings", "exit_ms"] => Ok(timings.exit_ms.to_string()),
        ["timings", "carousel_interval_ms"] => Ok(timings.carousel_interval_ms.to_string()),
        ["timings", "checkout_delay_ms"] => Ok(timings.checkout_delay_ms.to_string()),
        ["timings", "newsletter_delay_ms"] => Ok(timings.newsletter_delay_ms.to_string()),
        ["logging", "level"] => Ok(config.logging.level.as_str().to_string()),
        ["logging", "format"] => Ok(match config.logging.format {
            LogFormat::Json => "json".to_string(),
            LogFormat::Human => "human".to_string(),
        }),
        ["logging", "filter"] => Ok(config
            .logging
            .filter
            .clone()
            .unwrap_or_else(|| "null".to_string())),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut StorefrontConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let timings = &mut config.timings;

    match parts.as_slice() {
        ["testimonial_count"] => config.testimonial_count = value.parse()?,
        ["storage", "key"] => config.storage.key = value.to_string(),
        ["storage", "dir"] => config.storage.dir = PathBuf::from(value),
        ["timings", "notification_ms"] => timings.notification_ms = value.parse()?,
        ["timings", "enter_ms"] => timings.enter_ms = value.parse()?,
        ["timings", "exit_ms"] => timings.exit_ms = value.parse()?,
        ["timings", "carousel_interval_ms"] => timings.carousel_interval_ms = value.parse()?,
        ["timings", "checkout_delay_ms"] => timings.checkout_delay_ms = value.parse()?,
        ["timings", "newsletter_delay_ms"] => timings.newsletter_delay_ms = value.parse()?,
        ["logging", "level"] => config.logging.level = parse_lowercase::<LogLevel>(value)?,
        ["logging", "format"] => config.logging.format = parse_lowercase::<LogFormat>(value)?,
        ["logging", "filter"] => config.logging.filter = Some(value.to_string()),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

/// Parse a lowercase-serialized enum from its name.
fn parse_lowercase<T: DeserializeOwned>(value: &str) -> Result<T> {
    let json = serde_json::Value::String(value.trim().to_lowercase());
    serde_json::from_value(json).map_err(|_| anyhow::anyhow!("Invalid value: {}", value))
}
