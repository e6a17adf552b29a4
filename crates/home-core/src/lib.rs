//! Domain types and logic for the Home Essentials affiliate site.
//!
//! - **Catalog**: products grouped by a closed set of categories
//! - **Blog**: post teasers shown below the catalog
//! - **Affiliate**: outbound link decoration with the associate tag
//! - **Recommend / Admin**: the admin-facing helpers exported by the site
//!
//! Seed data is loaded once into an [`AppContext`] and never mutated
//! afterwards; renderers and controllers borrow from it.
//!
//! # Example
//!
//! ```rust
//! use home_core::prelude::*;
//!
//! let ctx = AppContext::new(SiteConfig::default());
//! let kitchen = ctx.catalog.get_by_category("kitchen");
//! assert_eq!(kitchen.len(), 3);
//!
//! let url = ctx.links.decorate(&kitchen[0].affiliate_url);
//! assert!(url.ends_with("?tag=virginiahomee-20"));
//! ```

pub mod admin;
pub mod affiliate;
pub mod blog;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod recommend;

pub use affiliate::AffiliateLinkBuilder;
pub use blog::{BlogPost, BlogStore};
pub use catalog::{CatalogStore, Category, Product};
pub use config::SiteConfig;
pub use context::AppContext;
pub use error::CatalogError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::admin::{fetch_market_data, generate_blog_content, BlogOutline, MarketData};
    pub use crate::affiliate::AffiliateLinkBuilder;
    pub use crate::blog::{BlogPost, BlogStore};
    pub use crate::catalog::{CatalogStore, Category, Product};
    pub use crate::config::{AffiliateConfig, EventsConfig, SiteConfig};
    pub use crate::context::AppContext;
    pub use crate::error::CatalogError;
    pub use crate::recommend::{generate_product_recommendations, RecommendationPreferences};
}
