//! Site configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Site configuration, usually read from `home.toml`.
///
/// Every section is optional; missing keys fall back to the values the live
/// site ships with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub affiliate: AffiliateConfig,

    #[serde(default)]
    pub catalog: CatalogSources,

    #[serde(default)]
    pub events: EventsConfig,
}

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSection {
    /// Site name shown in the header and title.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Tab selected when the page loads.
    #[serde(default)]
    pub default_category: Category,

    /// Display delay before product cards replace the loading indicator.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,

    /// Number of blog teasers shown.
    #[serde(default = "default_blog_teaser_count")]
    pub blog_teaser_count: usize,
}

fn default_site_name() -> String {
    "Virginia Home Essentials".to_string()
}

fn default_load_delay_ms() -> u64 {
    500
}

fn default_blog_teaser_count() -> usize {
    3
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            default_category: Category::default(),
            load_delay_ms: default_load_delay_ms(),
            blog_teaser_count: default_blog_teaser_count(),
        }
    }
}

/// Affiliate program settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateConfig {
    /// Eligible host; subdomains match too.
    #[serde(default = "default_affiliate_domain")]
    pub domain: String,

    /// Associate tag value.
    #[serde(default = "default_affiliate_tag")]
    pub tag: String,

    /// Query parameter carrying the tag.
    #[serde(default = "default_affiliate_param")]
    pub param: String,
}

fn default_affiliate_domain() -> String {
    "amazon.com".to_string()
}

fn default_affiliate_tag() -> String {
    "virginiahomee-20".to_string()
}

fn default_affiliate_param() -> String {
    "tag".to_string()
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            domain: default_affiliate_domain(),
            tag: default_affiliate_tag(),
            param: default_affiliate_param(),
        }
    }
}

/// Optional seed overrides. The built-in seed is used when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSources {
    /// JSON file in the `{ "<category>": [product, ...] }` shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_path: Option<PathBuf>,

    /// JSON array of blog posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_path: Option<PathBuf>,
}

/// Event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventsConfig {
    /// Directory holding storage slots.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,

    /// Slot holding the event log.
    #[serde(default = "default_slot")]
    pub slot: String,

    /// JSON-lines file that receives forwarded analytics events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_path: Option<PathBuf>,

    /// `json` or `human`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".home").join("events")
}

fn default_slot() -> String {
    "site_events".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            slot: default_slot(),
            sink_path: None,
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.default_category, Category::SmartHome);
        assert_eq!(config.site.load_delay_ms, 500);
        assert_eq!(config.site.blog_teaser_count, 3);
        assert_eq!(config.affiliate.tag, "virginiahomee-20");
        assert_eq!(config.events.slot, "site_events");
        assert!(config.events.sink_path.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "site": { "default_category": "kitchen" }, "affiliate": { "tag": "other-20" } }"#,
        )
        .unwrap();

        assert_eq!(config.site.default_category, Category::Kitchen);
        assert_eq!(config.site.load_delay_ms, 500);
        assert_eq!(config.affiliate.tag, "other-20");
        assert_eq!(config.affiliate.domain, "amazon.com");
    }
}
