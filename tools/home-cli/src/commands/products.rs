//! Product listing.

use anyhow::Result;

use home_core::Product;
use home_render::sections::render_stars;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{truncate, Output};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let app = ctx.app_context()?;
    let category = args
        .category
        .unwrap_or_else(|| app.default_category().as_str().to_string());
    let products = app.catalog.get_by_category(&category);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products in {}", category));
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }
    print_table(&ctx.output, products);
    Ok(())
}

/// Print products as a table.
pub fn print_table(output: &Output, products: &[Product]) {
    let widths = [4, 36, 10, 12, 6];
    output.table_row(&["ID", "TITLE", "PRICE", "RATING", ""], &widths);

    for product in products {
        let id = product.id.to_string();
        let title = truncate(&product.title, widths[1]);
        let stars = render_stars(product.rating);
        let badge = if product.trending { "🔥" } else { "" };
        output.table_row(&[&id, &title, &product.price, &stars, badge], &widths);
    }
}
