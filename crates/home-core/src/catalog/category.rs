//! Category keys for tab-based product filtering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product category.
///
/// The set is closed: every product bucket in the catalog is keyed by one of
/// these, and the tabs on the page are drawn from [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    SmartHome,
    Security,
    Kitchen,
    Tools,
    Decor,
}

impl Category {
    /// All categories in store order.
    pub const ALL: [Category; 5] = [
        Category::SmartHome,
        Category::Security,
        Category::Kitchen,
        Category::Tools,
        Category::Decor,
    ];

    /// The key used in URLs, seed files, and event data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SmartHome => "smart-home",
            Category::Security => "security",
            Category::Kitchen => "kitchen",
            Category::Tools => "tools",
            Category::Decor => "decor",
        }
    }

    /// Parse a category key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SmartHome => "Smart Home",
            Category::Security => "Security",
            Category::Kitchen => "Kitchen",
            Category::Tools => "Tools",
            Category::Decor => "Decor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Category::from_key("garden"), None);
        assert_eq!(Category::from_key("Kitchen"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::SmartHome).unwrap();
        assert_eq!(json, r#""smart-home""#);

        let parsed: Category = serde_json::from_str(r#""decor""#).unwrap();
        assert_eq!(parsed, Category::Decor);
    }
}
