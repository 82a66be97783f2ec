//! Category records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::id::CategoryId;

/// A top-level catalog category.
///
/// Collections are display-only sub-groupings identified by name; they are
/// not entities of their own. `collection_images` may be missing an entry
/// for any collection, in which case callers fall back to a generated
/// placeholder reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL slug, unique across categories.
    pub slug: String,
    /// Hero image reference.
    pub image: String,
    /// Ordered collection names within this category.
    #[serde(default)]
    pub collections: Vec<String>,
    /// Collection name -> image reference; may be incomplete.
    #[serde(default)]
    pub collection_images: HashMap<String, String>,
}

impl Category {
    /// Whether this category already contains the named collection.
    #[must_use]
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_collection() {
        let category = Category {
            id: CategoryId::new(1),
            name: "Islamic Art".to_string(),
            slug: "islamic-art".to_string(),
            image: "https://example.com/cat.jpg".to_string(),
            collections: vec!["Calligraphy".to_string()],
            collection_images: HashMap::new(),
        };
        assert!(category.has_collection("Calligraphy"));
        assert!(!category.has_collection("Lanterns"));
    }

    #[test]
    fn test_deserialize_tolerates_missing_collections() {
        let json = r#"{
            "id": 3,
            "name": "Gifts",
            "slug": "gifts",
            "image": "https://example.com/gifts.jpg"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.collections.is_empty());
        assert!(category.collection_images.is_empty());
    }
}
