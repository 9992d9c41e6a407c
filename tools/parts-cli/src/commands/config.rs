//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");

    match (&ctx.config_path, &ctx.config_error) {
        (Some(path), None) => ctx.output.kv("Loaded from", &path.display().to_string()),
        (Some(path), Some(_)) => ctx
            .output
            .kv("Loaded from", &format!("(defaults, {} ignored)", path.display())),
        (None, _) => ctx.output.kv("Loaded from", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.blank();
    ctx.output.info("Catalog:");
    ctx.output.kv(
        "  path",
        config.catalog.path.as_deref().unwrap_or("(bundled)"),
    );
    ctx.output.kv(
        "  low_stock_threshold",
        &config.catalog.low_stock_threshold.to_string(),
    );

    ctx.output.blank();
    ctx.output.info("Filters:");
    ctx.output
        .kv("  price_min", &format!("{:.2}", config.filters.price_min));
    ctx.output
        .kv("  price_max", &format!("{:.2}", config.filters.price_max));

    ctx.output.blank();
    ctx.output.info("Cart:");
    ctx.output
        .kv("  enforce_stock", &config.cart.enforce_stock.to_string());

    ctx.output.blank();
    ctx.output.info("Logging:");
    ctx.output.kv("  level", &config.logging.level.to_string());
    ctx.output
        .kv("  format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    if Path::new(path).exists() && !force {
        let overwrite = !ctx.output.is_json()
            && Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", path))
                .default(false)
                .interact()?;
        if !overwrite {
            bail!("Config file already exists. Use --force to overwrite.");
        }
    }

    if path.ends_with(".json") {
        CliConfig::default().save(path)?;
    } else {
        std::fs::write(path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created {}", path));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (mut errors, warnings) = ctx.config.check();
    if let (Some(path), Some(error)) = (&ctx.config_path, &ctx.config_error) {
        errors.insert(0, format!("{} could not be loaded: {}", path.display(), error));
    }

    match ctx.load_catalog() {
        Ok(catalog) => ctx.output.kv("Catalog", &format!("{} parts", catalog.len())),
        Err(e) => errors.push(format!("{:#}", e)),
    }

    for warning in &warnings {
        ctx.output.warn(warning);
    }

    for error in &errors {
        ctx.output.error(error);
    }

    if !errors.is_empty() {
        bail!("Configuration validation failed");
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success(&format!(
            "Configuration is valid ({} warnings)",
            warnings.len()
        ));
    }

    Ok(())
}
