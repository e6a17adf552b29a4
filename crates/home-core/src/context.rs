//! Application context.

use crate::affiliate::AffiliateLinkBuilder;
use crate::blog::{BlogPost, BlogStore};
use crate::catalog::{CatalogStore, Category};
use crate::config::SiteConfig;
use crate::error::CatalogError;

/// Seed data and settings shared by renderers and controllers.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: SiteConfig,
    pub catalog: CatalogStore,
    pub blog: BlogStore,
    pub links: AffiliateLinkBuilder,
}

impl AppContext {
    /// Build a context over the built-in seed data.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_stores(config, CatalogStore::seed(), BlogStore::seed())
    }

    /// Build a context with explicit stores.
    pub fn with_stores(config: SiteConfig, catalog: CatalogStore, blog: BlogStore) -> Self {
        let links = AffiliateLinkBuilder::from_config(&config.affiliate);
        Self {
            config,
            catalog,
            blog,
            links,
        }
    }

    /// Build a context, reading any seed overrides named in the config.
    pub fn load(config: SiteConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog.products_path {
            Some(path) => CatalogStore::load(path)?,
            None => CatalogStore::seed(),
        };
        let blog = match &config.catalog.posts_path {
            Some(path) => BlogStore::load(path)?,
            None => BlogStore::seed(),
        };
        Ok(Self::with_stores(config, catalog, blog))
    }

    /// Tab selected on page load.
    pub fn default_category(&self) -> Category {
        self.config.site.default_category
    }

    /// Blog teasers shown on the page.
    pub fn blog_teasers(&self) -> &[BlogPost] {
        self.blog.teasers(self.config.site.blog_teaser_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_uses_seed() {
        let ctx = AppContext::new(SiteConfig::default());
        assert_eq!(ctx.catalog.len(), 15);
        assert_eq!(ctx.blog_teasers().len(), 3);
        assert_eq!(ctx.default_category(), Category::SmartHome);
    }

    #[test]
    fn test_links_follow_config() {
        let mut config = SiteConfig::default();
        config.affiliate.tag = "custom-20".to_string();
        let ctx = AppContext::new(config);
        assert_eq!(
            ctx.links.decorate("https://amazon.com/dp/A"),
            "https://amazon.com/dp/A?tag=custom-20"
        );
    }

    #[test]
    fn test_load_posts_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"title":"T","excerpt":"E","image":"I","date":"D","category":"C","readTime":"R","url":"U"}}]"#
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.catalog.posts_path = Some(file.path().to_path_buf());

        let ctx = AppContext::load(config).unwrap();
        assert_eq!(ctx.blog.len(), 1);
        assert_eq!(ctx.catalog.len(), 15);
    }
}
