//! Static page rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use home_core::{Category, Product};
use home_storefront::{render_home_page, PageLinks};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let app = ctx.app_context()?;
    let active = args
        .category
        .unwrap_or_else(|| app.default_category().as_str().to_string());

    if app.catalog.get_by_category(&active).is_empty() {
        ctx.output
            .warn(&format!("Category '{}' has no products", active));
    }

    let card = |p: &Product| app.links.decorate(&p.affiliate_url);
    let tab = |c: Category| format!("?category={}", c);
    let links = PageLinks {
        card: &card,
        tab: &tab,
        newsletter_action: "/api/newsletter",
    };
    let html = render_home_page(&app, &active, &links, None);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let path = ctx.resolve_path(Path::new(&args.output));
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path,
            "category": active,
            "bytes": html.len(),
        }));
    } else {
        ctx.output.success(&format!("Wrote {}", path.display()));
        ctx.output.kv("category", &active);
        ctx.output.kv("bytes", &html.len().to_string());
    }

    Ok(())
}
