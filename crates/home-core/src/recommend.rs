//! Product recommendations for the admin panel.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, Product};

/// Default number of products kept per category.
pub const DEFAULT_MAX_PER_CATEGORY: usize = 2;

/// Filter preferences for [`generate_product_recommendations`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPreferences {
    /// Category keys to draw from.
    pub categories: Vec<String>,
    /// Minimum rating, inclusive.
    #[serde(default)]
    pub min_rating: f64,
    /// Products kept per category; `None` and `0` both mean the default of 2.
    #[serde(default)]
    pub max_per_category: Option<usize>,
}

impl RecommendationPreferences {
    fn limit(&self) -> usize {
        match self.max_per_category {
            Some(n) if n > 0 => n,
            _ => DEFAULT_MAX_PER_CATEGORY,
        }
    }
}

/// Top-rated products per requested category.
///
/// Categories are visited in store order (not request order). Within a
/// category, products at or above `min_rating` are sorted by rating descending;
/// equal ratings keep store order.
pub fn generate_product_recommendations<'a>(
    catalog: &'a CatalogStore,
    prefs: &RecommendationPreferences,
) -> Vec<&'a Product> {
    let limit = prefs.limit();
    let mut recommendations = Vec::new();

    for (category, items) in catalog.iter() {
        if !prefs.categories.iter().any(|key| key == category.as_str()) {
            continue;
        }

        let mut top: Vec<&Product> = items
            .iter()
            .filter(|p| p.rating >= prefs.min_rating)
            .collect();
        top.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        top.truncate(limit);

        recommendations.extend(top);
    }

    recommendations
}
