//! Home CLI - command line tool for the Home Essentials site.
//!
//! Commands:
//! - `home render` - Write the page to an HTML file
//! - `home products` - List a category's products
//! - `home browse` - Switch categories with the delayed render
//! - `home click` - Track a product click and print the affiliate URL
//! - `home subscribe` - Sign up for the newsletter
//! - `home recommend` / `outline` / `market` - Admin helpers
//! - `home events` - Show the recorded event log
//! - `home config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    BrowseArgs, ClickArgs, ConfigArgs, EventsArgs, OutlineArgs, ProductsArgs, RecommendArgs,
    RenderArgs, SubscribeArgs,
};

/// Home CLI - render, browse, and administer the Home Essentials site
#[derive(Parser)]
#[command(name = "home")]
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
    /// Render the page to an HTML file
    Render(RenderArgs),

    /// List products in a category
    Products(ProductsArgs),

    /// Select categories and watch the product grid redraw
    Browse(BrowseArgs),

    /// Track a product click and print where it leads
    Click(ClickArgs),

    /// Subscribe an email address to the newsletter
    Subscribe(SubscribeArgs),

    /// Top-rated products for a set of categories
    Recommend(RecommendArgs),

    /// Blog post outline for a topic
    Outline(OutlineArgs),

    /// Virginia housing market snapshot
    Market,

    /// Show recorded events
    Events(EventsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Click(args) => commands::click::run(args, &ctx).await,
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx).await,
        Commands::Recommend(args) => commands::admin::recommend(args, &ctx).await,
        Commands::Outline(args) => commands::admin::outline(args, &ctx).await,
        Commands::Market => commands::admin::market(&ctx).await,
        Commands::Events(args) => commands::events::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
