//! Config file loading and saving.

use std::path::Path;

use anyhow::{Context, Result};
use home_core::SiteConfig;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["home.toml", ".home.toml", "home.json"];

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Load config from a file, TOML or JSON by extension.
pub fn load(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Save config to a file.
pub fn save(config: &SiteConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// Generate a default home.toml.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Home Essentials site configuration

[site]
name = "{name}"
default_category = "smart-home"
load_delay_ms = 500
blog_teaser_count = 3

[affiliate]
domain = "amazon.com"
tag = "virginiahomee-20"
param = "tag"

[catalog]
# products_path = "data/products.json"
# posts_path = "data/posts.json"

[events]
store_dir = ".home/events"
slot = "site_events"
# sink_path = ".home/analytics.jsonl"
log_format = "json"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use home_core::Category;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: SiteConfig =
            toml::from_str(&generate_default_config("Virginia Home Essentials")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.site.default_category = Category::Kitchen;
        config.affiliate.tag = "other-20".to_string();

        for name in ["home.toml", "home.json"] {
            let path = tmp.path().join(name);
            save(&config, &path).unwrap();
            assert_eq!(load(&path).unwrap(), config);
        }

        let json = std::fs::read_to_string(tmp.path().join("home.json")).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_load_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("home.toml");
        std::fs::write(&path, "[site\nname = 1").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
