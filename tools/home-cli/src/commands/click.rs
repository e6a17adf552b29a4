//! Product click tracking.

use anyhow::{Context as _, Result};

use home_storefront::ClickHandler;

use super::ClickArgs;
use crate::context::Context;

/// Run the click command.
pub async fn run(args: ClickArgs, ctx: &Context) -> Result<()> {
    let app = ctx.app_context()?;
    let product = app
        .catalog
        .find(args.id)
        .with_context(|| format!("No product with id {}", args.id))?;

    let events = ctx.event_log();
    let navigation = ClickHandler::from_context(&app, events)
        .handle(product)
        .context("Failed to record click")?;

    if ctx.output.is_json() {
        ctx.output.json(&navigation);
        return Ok(());
    }

    ctx.output.success(&format!("Tracked click on {}", product.title));
    ctx.output.kv("open", &navigation.url);
    ctx.output.kv("target", navigation.target.as_attr());
    Ok(())
}
