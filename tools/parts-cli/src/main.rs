//! Parts CLI - Command line storefront for the parts counter.
//!
//! Commands:
//! - `parts search` - Filter the catalog, optionally by vehicle
//! - `parts part` - Show one part in detail
//! - `parts vehicles` - Browse the make/model reference table
//! - `parts cart` - Run cart operations and print the result
//! - `parts config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, PartArgs, SearchArgs, VehiclesArgs};

/// Parts CLI - Find parts that fit your vehicle
#[derive(Parser)]
#[command(name = "parts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
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
    /// Search the catalog
    Search(SearchArgs),

    /// Show details for a part
    Part(PartArgs),

    /// List vehicle makes, or the models of one make
    Vehicles(VehiclesArgs),

    /// Run cart operations in order
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

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
        logging.level = logging.level.more_verbose();
    }
    if let Err(e) = parts_observability::init_logging(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }
    tracing::debug!(config = ?ctx.config_path, cwd = %ctx.cwd.display(), "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Part(args) => commands::part::run(args, &ctx),
        Commands::Vehicles(args) => commands::vehicles::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
