//! Admin helpers: recommendations, blog outlines, market data.

use anyhow::Result;

use home_core::admin::{fetch_market_data, generate_blog_content};
use home_core::recommend::{generate_product_recommendations, RecommendationPreferences};

use super::products::print_table;
use super::{OutlineArgs, RecommendArgs};
use crate::context::Context;

/// Run the recommend command.
pub async fn recommend(args: RecommendArgs, ctx: &Context) -> Result<()> {
    let app = ctx.app_context()?;
    let prefs = RecommendationPreferences {
        categories: args.categories,
        min_rating: args.min_rating,
        max_per_category: args.max_per_category,
    };
    let picks = generate_product_recommendations(&app.catalog, &prefs);

    if ctx.output.is_json() {
        ctx.output.json(&picks);
        return Ok(());
    }

    ctx.output.header("Recommendations");
    if picks.is_empty() {
        ctx.output.info("Nothing matches those preferences.");
        return Ok(());
    }
    let products: Vec<_> = picks.into_iter().cloned().collect();
    print_table(&ctx.output, &products);
    Ok(())
}

/// Run the outline command.
pub async fn outline(args: OutlineArgs, ctx: &Context) -> Result<()> {
    let outline = generate_blog_content(&args.topic, &args.keywords);

    if ctx.output.is_json() {
        ctx.output.json(&outline);
        return Ok(());
    }

    ctx.output.header(&outline.title);
    for heading in &outline.outline {
        ctx.output.list_item(heading);
    }
    ctx.output.info("");
    if !outline.keywords.is_empty() {
        ctx.output.kv("keywords", &outline.keywords.join(", "));
    }
    ctx.output.kv("length", &outline.estimated_length);
    ctx.output.kv("audience", &outline.target_audience);
    Ok(())
}

/// Run the market command.
pub async fn market(ctx: &Context) -> Result<()> {
    let data = fetch_market_data().await;

    if ctx.output.is_json() {
        ctx.output.json(&data);
        return Ok(());
    }

    ctx.output.header("Virginia housing market");
    ctx.output.kv(
        "inventory",
        &format!(
            "{} ({} {})",
            data.inventory.current, data.inventory.change, data.inventory.period
        ),
    );
    ctx.output.kv("median (NoVA)", &data.median_price.nova);
    ctx.output.kv("median (statewide)", &data.median_price.statewide);
    ctx.output.kv("median change", &data.median_price.change);
    ctx.output.info("");
    for trend in &data.trends {
        ctx.output.list_item(trend);
    }
    Ok(())
}
