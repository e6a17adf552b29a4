//! Product catalog module.
//!
//! The catalog is an ordered set of category buckets, each holding products in
//! seed order.

mod category;
mod product;
mod seed;

use std::collections::HashMap;
use std::path::Path;

pub use category::Category;
pub use product::Product;
pub(crate) use seed::seed_image;

use crate::error::CatalogError;

/// In-memory catalog keyed by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    buckets: Vec<(Category, Vec<Product>)>,
}

impl CatalogStore {
    /// Create a catalog from explicit buckets, kept in the given order.
    pub fn new(buckets: Vec<(Category, Vec<Product>)>) -> Self {
        Self { buckets }
    }

    /// The built-in seed catalog.
    pub fn seed() -> Self {
        Self::new(seed::products())
    }

    /// Parse the `{ "<category>": [product, ...] }` export shape.
    ///
    /// Buckets come out in [`Category::ALL`] order regardless of key order in
    /// the document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let mut by_key: HashMap<Category, Vec<Product>> = serde_json::from_str(json)?;
        let buckets = Category::ALL
            .into_iter()
            .filter_map(|category| by_key.remove(&category).map(|items| (category, items)))
            .collect();
        Ok(Self::new(buckets))
    }

    /// Load a catalog export from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Products for a category key, in store order.
    ///
    /// Unknown keys yield an empty slice.
    pub fn get_by_category(&self, key: &str) -> &[Product] {
        match Category::from_key(key) {
            Some(category) => self.products(category),
            None => &[],
        }
    }

    /// Products for a category, in store order.
    pub fn products(&self, category: Category) -> &[Product] {
        self.buckets
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Find a product by id across all buckets.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.buckets
            .iter()
            .flat_map(|(_, items)| items.iter())
            .find(|p| p.id == id)
    }

    /// Iterate buckets in store order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Product])> {
        self.buckets
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    /// Categories present in the store, in store order.
    pub fn categories(&self) -> Vec<Category> {
        self.buckets.iter().map(|(c, _)| *c).collect()
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_empty() {
        let store = CatalogStore::seed();
        assert!(store.get_by_category("garden").is_empty());
        assert!(store.get_by_category("").is_empty());
        assert!(store.get_by_category("SMART-HOME").is_empty());
    }

    #[test]
    fn test_kitchen_seed_order() {
        let store = CatalogStore::seed();
        let kitchen = store.get_by_category("kitchen");

        assert_eq!(kitchen.len(), 3);
        let ids: Vec<u32> = kitchen.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![8, 9, 10]);
        assert!(kitchen[0].trending);
        assert!(!kitchen[1].trending);
        assert!(!kitchen[2].trending);
    }

    #[test]
    fn test_seed_category_invariant() {
        let store = CatalogStore::seed();
        assert_eq!(store.len(), 15);
        assert_eq!(store.categories(), Category::ALL.to_vec());
        for (category, items) in store.iter() {
            assert!(items.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_find_by_id() {
        let store = CatalogStore::seed();
        assert_eq!(store.find(12).map(|p| p.title.as_str()), Some("Stanley 25ft Tape Measure"));
        assert!(store.find(99).is_none());
    }

    #[test]
    fn test_from_json_orders_buckets() {
        let json = r#"{
            "decor": [{
                "id": 1, "title": "Shelf", "description": "d", "price": "$1",
                "rating": 4.0, "reviews": "1", "image": "i",
                "amazonUrl": "https://amazon.com/dp/X", "category": "decor"
            }],
            "kitchen": [{
                "id": 2, "title": "Pot", "description": "d", "price": "$2",
                "rating": 4.5, "reviews": "2", "image": "i",
                "amazonUrl": "https://amazon.com/dp/Y", "category": "kitchen"
            }]
        }"#;

        let store = CatalogStore::from_json_str(json).unwrap();
        assert_eq!(store.categories(), vec![Category::Kitchen, Category::Decor]);
        assert!(store.products(Category::Tools).is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_bucket() {
        let result = CatalogStore::from_json_str(r#"{ "garden": [] }"#);
        assert!(matches!(result, Err(CatalogError::SerializationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogStore::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
