//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod part;
pub mod search;
pub mod vehicles;

use clap::{Args, Subcommand};

use cart::CartOp;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against name, part number, brand and description.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category, or "All Categories".
    #[arg(long)]
    pub category: Option<String>,

    /// Brand, or "All Brands".
    #[arg(long)]
    pub brand: Option<String>,

    /// Lowest price shown, e.g. 50 or $49.99.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Highest price shown.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Hide parts that are out of stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Vehicle make.
    #[arg(long)]
    pub make: Option<String>,

    /// Vehicle model.
    #[arg(long)]
    pub model: Option<String>,

    /// Vehicle model year (default: current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Engine description. Shown only, never matched.
    #[arg(long)]
    pub engine: Option<String>,
}

impl SearchArgs {
    /// Whether any vehicle field was given.
    pub fn has_vehicle(&self) -> bool {
        self.make.is_some() || self.model.is_some() || self.year.is_some() || self.engine.is_some()
    }
}

/// Arguments for the part command.
#[derive(Args)]
pub struct PartArgs {
    /// Part ID.
    pub id: String,
}

/// Arguments for the vehicles command.
#[derive(Args)]
pub struct VehiclesArgs {
    /// Show the models of this make.
    pub make: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations: add:<id>, set:<id>=<qty>, inc:<id>, dec:<id>, remove:<id>, clear.
    #[arg(required = true)]
    pub ops: Vec<CartOp>,
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
    /// Initialize a new config file.
    Init {
        /// Config file to write.
        #[arg(default_value = "parts.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
