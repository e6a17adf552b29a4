//! CLI command implementations.

pub mod admin;
pub mod browse;
pub mod click;
pub mod config;
pub mod events;
pub mod products;
pub mod render;
pub mod subscribe;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file.
    #[arg(short, long, default_value = "index.html")]
    pub output: String,

    /// Active category (default: from config).
    #[arg(long)]
    pub category: Option<String>,

    /// Print the page to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category key (default: from config).
    pub category: Option<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Categories to select in order; prompts interactively when empty.
    pub categories: Vec<String>,

    /// Override the loading delay in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Arguments for the click command.
#[derive(Args)]
pub struct ClickArgs {
    /// Product ID.
    pub id: u32,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,
}

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Category keys.
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub categories: Vec<String>,

    /// Minimum rating.
    #[arg(long, default_value = "0")]
    pub min_rating: f64,

    /// Products per category (default: 2).
    #[arg(long)]
    pub max_per_category: Option<usize>,
}

/// Arguments for the outline command.
#[derive(Args)]
pub struct OutlineArgs {
    /// Post topic.
    pub topic: String,

    /// Target keywords.
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Arguments for the events command.
#[derive(Args)]
pub struct EventsArgs {
    /// Show only events with this name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Show only the last N events.
    #[arg(short, long)]
    pub limit: Option<usize>,
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
    /// Validate the config file.
    Validate,
}
