//! Admin-facing content helpers.
//!
//! These stand in for content and market-data integrations that the site
//! never wired up: each returns a fixed structure.

use serde::{Deserialize, Serialize};

/// Outline template for a new blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogOutline {
    pub title: String,
    pub outline: Vec<String>,
    pub keywords: Vec<String>,
    pub estimated_length: String,
    pub target_audience: String,
}

const OUTLINE_SECTIONS: [&str; 5] = [
    "Introduction",
    "Key Considerations",
    "Product Recommendations",
    "Virginia-Specific Tips",
    "Conclusion and Next Steps",
];

/// Build the outline template for `topic`.
pub fn generate_blog_content(topic: &str, keywords: &[String]) -> BlogOutline {
    BlogOutline {
        title: format!("{}: A Complete Guide for Virginia Homeowners", topic),
        outline: OUTLINE_SECTIONS.iter().map(|s| s.to_string()).collect(),
        keywords: keywords.to_vec(),
        estimated_length: "1500-2000 words".to_string(),
        target_audience: "New homeowners in Virginia".to_string(),
    }
}

/// Housing inventory snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub current: u32,
    pub change: String,
    pub period: String,
}

/// Median sale prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedianPrices {
    /// Northern Virginia.
    pub nova: String,
    pub statewide: String,
    pub change: String,
}

/// Market insight block shown to admins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub inventory: InventorySnapshot,
    pub median_price: MedianPrices,
    pub trends: Vec<String>,
}

/// Market data for the insights panel.
///
/// Async to match the shape of a real data source; it never suspends.
pub async fn fetch_market_data() -> MarketData {
    MarketData {
        inventory: InventorySnapshot {
            current: 36801,
            change: "+18.0%".to_string(),
            period: "Year over year".to_string(),
        },
        median_price: MedianPrices {
            nova: "$1,250,000".to_string(),
            statewide: "$425,000".to_string(),
            change: "+5.2%".to_string(),
        },
        trends: vec![
            "Buyer's market emerging in Northern Virginia".to_string(),
            "Inventory levels increasing across the state".to_string(),
            "First-time buyer programs expanding".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blog_outline_template() {
        let keywords = vec!["smart home".to_string(), "energy".to_string()];
        let outline = generate_blog_content("Smart Thermostats", &keywords);

        assert_eq!(
            outline.title,
            "Smart Thermostats: A Complete Guide for Virginia Homeowners"
        );
        assert_eq!(outline.outline.len(), 5);
        assert_eq!(outline.outline[0], "Introduction");
        assert_eq!(outline.outline[4], "Conclusion and Next Steps");
        assert_eq!(outline.keywords, keywords);
        assert_eq!(outline.estimated_length, "1500-2000 words");
    }

    #[test]
    fn test_outline_json_shape() {
        let outline = generate_blog_content("Decor", &[]);
        let json = serde_json::to_value(&outline).unwrap();
        assert_eq!(json["targetAudience"], "New homeowners in Virginia");
        assert_eq!(json["estimatedLength"], "1500-2000 words");
    }

    #[tokio::test]
    async fn test_market_data_mock() {
        let data = fetch_market_data().await;
        assert_eq!(data.inventory.current, 36801);
        assert_eq!(data.inventory.change, "+18.0%");
        assert_eq!(data.median_price.statewide, "$425,000");
        assert_eq!(data.trends.len(), 3);
    }
}
