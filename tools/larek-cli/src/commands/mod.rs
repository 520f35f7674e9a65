//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod order;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products of this category.
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product ids to put in the cart.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Payment method (card or cash).
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Delivery address.
    #[arg(short, long)]
    pub address: Option<String>,

    /// Contact email.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Contact phone.
    #[arg(long)]
    pub phone: Option<String>,

    /// Do not prompt; fail on missing data.
    #[arg(short, long)]
    pub yes: bool,
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
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
