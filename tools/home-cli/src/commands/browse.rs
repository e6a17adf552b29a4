//! Interactive category browsing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use home_core::{AppContext, Category};
use home_storefront::{load_blog_posts, CategorySelector, Container};

use super::products::print_table;
use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let app = Arc::new(ctx.app_context()?);
    let container = Arc::new(Container::new());
    let mut selector = CategorySelector::new(Arc::clone(&app))
        .with_target(container.clone())
        .with_events(ctx.event_log());
    if let Some(ms) = args.delay_ms {
        selector = selector.with_delay(Duration::from_millis(ms));
    }

    let blog = Container::new();
    load_blog_posts(&app, Some(&blog));
    ctx.output.debug(&format!(
        "Blog teasers drawn ({} bytes)",
        blog.html().len()
    ));

    if !args.categories.is_empty() {
        // Selections land back to back, so only the last one is drawn.
        for category in &args.categories {
            selector.select(category)?;
        }
        show(&mut selector, &container, &app, ctx).await;
        return Ok(());
    }

    let categories = app.catalog.categories();
    let mut items: Vec<String> = categories.iter().map(|c| c.label().to_string()).collect();
    items.push("Quit".to_string());

    let mut current = categories
        .iter()
        .position(|c| c.as_str() == selector.active_category())
        .unwrap_or(0);

    selector.render_products();
    show(&mut selector, &container, &app, ctx).await;

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Category")
            .items(&items)
            .default(current)
            .interact()?;

        let Some(category) = categories.get(choice).copied() else {
            break;
        };
        current = choice;
        selector.select(category.as_str())?;
        show(&mut selector, &container, &app, ctx).await;
    }

    Ok(())
}

async fn show(
    selector: &mut CategorySelector,
    container: &Container,
    app: &AppContext,
    ctx: &Context,
) {
    let active = selector.active_category().to_string();
    let label = Category::from_key(&active).map_or(active.as_str(), |c| c.label());

    let spinner = ctx.output.spinner(&format!("Loading {}...", label));
    selector.wait().await;
    spinner.finish_and_clear();

    let cards = container.html().matches(r#"class="product-card""#).count();
    let products = app.catalog.get_by_category(&active);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "category": active,
            "cards": cards,
            "products": products,
        }));
        return;
    }

    ctx.output.header(label);
    ctx.output.debug(&format!("{} cards drawn", cards));
    if products.is_empty() {
        ctx.output.info("No products found.");
    } else {
        print_table(&ctx.output, products);
    }
}
