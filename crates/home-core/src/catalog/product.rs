//! Product records.

use serde::{Deserialize, Serialize};

use super::Category;

/// A product card in the catalog.
///
/// Display fields (`price`, `reviews`) are pre-formatted strings; nothing does
/// arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Display price, e.g. `"$49.99"`.
    pub price: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Pre-formatted review count, e.g. `"125,432"`.
    pub reviews: String,
    /// Image URL.
    pub image: String,
    /// Base outbound URL, decorated with the affiliate tag at click time.
    #[serde(alias = "amazonUrl")]
    pub affiliate_url: String,
    /// Must match the key of the bucket the product is stored under.
    pub category: Category,
    /// Manually authored "trending" badge.
    #[serde(default)]
    pub trending: bool,
}
