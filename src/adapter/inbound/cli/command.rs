//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. `run` hosts the mini-app in the
//! terminal; the remaining subcommands expose the conversion and order
//! composition logic for scripting.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::OrderSide;

/// Bridge Exchange mini-app controller
#[derive(Parser, Debug)]
#[command(name = "bridge-exchange")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a mini-app session in the terminal
    Run(RunArgs),

    /// Convert an amount with the configured rate table
    Convert(ConvertArgs),

    /// Derive an order amount from a slider percentage
    Percent(PercentArgs),

    /// Compose an order confirmation
    Order(OrderArgs),

    /// List the configured conversion rates
    Rates,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `run`.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Read commands from a file instead of prompting
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Accept every confirmation without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for `convert`.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Amount in the source currency
    pub amount: Decimal,
    /// Source currency code
    pub from: String,
    /// Destination currency code
    pub to: String,
}

/// Arguments for `percent`.
#[derive(clap::Args, Debug)]
pub struct PercentArgs {
    /// Slider position, 0 to 100
    pub percent: Decimal,
    /// Balance to scale (defaults to trading.available_balance)
    #[arg(long)]
    pub balance: Option<Decimal>,
}

/// Arguments for `order`.
#[derive(clap::Args, Debug)]
pub struct OrderArgs {
    /// Order side [buy, sell]
    #[arg(long, default_value = "buy")]
    pub side: OrderSide,
    /// Order amount in the base currency
    #[arg(long, default_value = "")]
    pub amount: String,
    /// Limit price in the quote currency (market order when omitted)
    #[arg(long)]
    pub price: Option<String>,
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented config template.
    Init {
        /// Where to write the template
        #[arg(default_value = "config.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}
