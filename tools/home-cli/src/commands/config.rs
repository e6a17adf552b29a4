//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use home_events::LogFormat;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output.kv("name", &config.site.name);
    ctx.output.kv("default_category", config.site.default_category.as_str());
    ctx.output.kv("load_delay_ms", &config.site.load_delay_ms.to_string());
    ctx.output
        .kv("blog_teaser_count", &config.site.blog_teaser_count.to_string());

    ctx.output.info("");
    ctx.output.info("[affiliate]");
    ctx.output.kv("domain", &config.affiliate.domain);
    ctx.output.kv("tag", &config.affiliate.tag);
    ctx.output.kv("param", &config.affiliate.param);

    if let Some(path) = &config.catalog.products_path {
        ctx.output.info("");
        ctx.output.info("[catalog]");
        ctx.output.kv("products_path", &path.display().to_string());
    }
    if let Some(path) = &config.catalog.posts_path {
        ctx.output.kv("posts_path", &path.display().to_string());
    }

    ctx.output.info("");
    ctx.output.info("[events]");
    ctx.output
        .kv("store_dir", &config.events.store_dir.display().to_string());
    ctx.output.kv("slot", &config.events.slot);
    if let Some(path) = &config.events.sink_path {
        ctx.output.kv("sink_path", &path.display().to_string());
    }
    ctx.output.kv("log_format", &config.events.log_format);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("home.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.site.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(ctx);

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn check(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let config = &ctx.config;
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.site.name.trim().is_empty() {
        errors.push("site.name is required".to_string());
    }
    if config.site.blog_teaser_count == 0 {
        warnings.push("site.blog_teaser_count is 0; no blog teasers will show".to_string());
    }
    if config.site.load_delay_ms > 5_000 {
        warnings.push(format!(
            "site.load_delay_ms {} is long for a loading indicator",
            config.site.load_delay_ms
        ));
    }

    if config.affiliate.tag.trim().is_empty() {
        errors.push("affiliate.tag is required".to_string());
    }
    if config.affiliate.param.trim().is_empty() {
        errors.push("affiliate.param is required".to_string());
    }
    if config.affiliate.domain.contains('/') {
        errors.push("affiliate.domain must be a bare host name".to_string());
    }

    if config.events.slot.trim().is_empty() {
        errors.push("events.slot is required".to_string());
    }
    if LogFormat::from_name(&config.events.log_format) == LogFormat::Json
        && !config.events.log_format.eq_ignore_ascii_case("json")
    {
        warnings.push(format!(
            "events.log_format '{}' is unknown; using json",
            config.events.log_format
        ));
    }

    // Seed files must load and keep products in their own bucket.
    match ctx.app_context() {
        Ok(app) => {
            for (category, products) in app.catalog.iter() {
                for product in products.iter().filter(|p| p.category != category) {
                    warnings.push(format!(
                        "product {} is listed under {} but tagged {}",
                        product.id, category, product.category
                    ));
                }
            }
            if app.catalog.is_empty() {
                warnings.push("catalog has no products".to_string());
            }
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    (errors, warnings)
}
