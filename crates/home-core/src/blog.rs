//! Blog post teasers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::seed_image;
use crate::error::CatalogError;

/// A blog post teaser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    /// Display date, e.g. `"December 8, 2025"`.
    pub date: String,
    /// Display category, e.g. `"Smart Home"`.
    pub category: String,
    /// Display read time, e.g. `"5 min read"`.
    pub read_time: String,
    /// Relative link to the full post.
    pub url: String,
}

/// Ordered list of blog posts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogStore {
    posts: Vec<BlogPost>,
}

impl BlogStore {
    /// Create a store from posts, kept in the given order.
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// The built-in seed posts.
    pub fn seed() -> Self {
        Self::new(vec![
            BlogPost {
                id: 1,
                title: "10 Smart Home Essentials Every New Virginia Homeowner Needs".to_string(),
                excerpt: "Transform your new home into a smart home with these must-have devices that enhance security, comfort, and energy efficiency.".to_string(),
                image: seed_image("photo-1558618047-3c8c76ca7d13"),
                date: "December 8, 2025".to_string(),
                category: "Smart Home".to_string(),
                read_time: "5 min read".to_string(),
                url: "blog/smart-home-essentials.html".to_string(),
            },
            BlogPost {
                id: 2,
                title: "Virginia Housing Market Update: What New Buyers Need to Know".to_string(),
                excerpt: "Latest trends in Virginia's real estate market, including inventory increases and what it means for first-time buyers.".to_string(),
                image: seed_image("photo-1560518883-ce09059eeffa"),
                date: "December 7, 2025".to_string(),
                category: "Market Insights".to_string(),
                read_time: "7 min read".to_string(),
                url: "blog/virginia-market-update.html".to_string(),
            },
            BlogPost {
                id: 3,
                title: "First-Time Home Buyer's Kitchen Setup Guide".to_string(),
                excerpt: "Essential kitchen appliances and tools that every new homeowner should have, from basic cookware to smart appliances.".to_string(),
                image: seed_image("photo-1556909114-f6e7ad7d3136"),
                date: "December 6, 2025".to_string(),
                category: "Kitchen".to_string(),
                read_time: "6 min read".to_string(),
                url: "blog/kitchen-setup-guide.html".to_string(),
            },
        ])
    }

    /// Parse a JSON array of posts.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON array of posts from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All posts in store order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// The first `limit` posts in store order.
    pub fn teasers(&self, limit: usize) -> &[BlogPost] {
        &self.posts[..limit.min(self.posts.len())]
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
