//! Category Model

use serde::{Deserialize, Serialize};

/// Category tree node, fetched read-only per manufacturer
///
/// Nodes form a forest: `parent_id` is `None` for roots, and a `parent_id`
/// referencing a node that does not exist is treated as a root as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Number of products directly under this category
    #[serde(default)]
    pub count: u32,
}

/// Polymorphic category reference as it appears on product records
///
/// The admin API returns the category field in three shapes depending on the
/// endpoint: a bare id string, a bare display name, or an embedded object.
/// Bare strings always deserialize as [`CategoryRef::Id`]; the resolver
/// reclassifies them against the category index (an unknown id that matches
/// a known name is treated as [`CategoryRef::Name`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Bare category id
    Id(String),
    /// Bare display name (constructed by resolution, never by serde)
    Name(String),
    /// Embedded category object from populated responses
    Embedded(EmbeddedCategory),
}

/// Embedded category object with the id under any of several keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedCategory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmbeddedCategory {
    /// Tolerant key extraction: `_id`, `id`, `slug`, `name` in order,
    /// falling back to empty.
    pub fn key(&self) -> &str {
        self.mongo_id
            .as_deref()
            .or(self.id.as_deref())
            .or(self.slug.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}

impl CategoryRef {
    /// Raw lookup key for this reference, before index resolution
    pub fn key(&self) -> &str {
        match self {
            CategoryRef::Id(s) | CategoryRef::Name(s) => s,
            CategoryRef::Embedded(e) => e.key(),
        }
    }

    /// Whether this reference carries no usable key at all
    pub fn is_empty(&self) -> bool {
        self.key().is_empty()
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        CategoryRef::Id(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_deserializes_as_id() {
        let r: CategoryRef = serde_json::from_str(r#""cat-1""#).unwrap();
        assert_eq!(r, CategoryRef::Id("cat-1".to_string()));
        assert_eq!(r.key(), "cat-1");
    }

    #[test]
    fn test_embedded_object_deserializes() {
        let r: CategoryRef =
            serde_json::from_str(r#"{"_id":"cat-1","name":"Sofas"}"#).unwrap();
        assert_eq!(r.key(), "cat-1");
    }

    #[test]
    fn test_embedded_key_order() {
        // _id wins over id, id over slug, slug over name
        let e: EmbeddedCategory =
            serde_json::from_str(r#"{"_id":"a","id":"b","slug":"c","name":"d"}"#).unwrap();
        assert_eq!(e.key(), "a");

        let e: EmbeddedCategory = serde_json::from_str(r#"{"slug":"c","name":"d"}"#).unwrap();
        assert_eq!(e.key(), "c");

        let e: EmbeddedCategory = serde_json::from_str(r#"{"name":"d"}"#).unwrap();
        assert_eq!(e.key(), "d");
    }

    #[test]
    fn test_empty_embedded_falls_back_to_empty() {
        let e: EmbeddedCategory = serde_json::from_str("{}").unwrap();
        assert_eq!(e.key(), "");
        assert!(CategoryRef::Embedded(e).is_empty());
    }

    #[test]
    fn test_category_node_unknown_fields_tolerated() {
        let json = r#"{"id":"c1","name":"Chairs","parentId":null,"count":3,"extra":true}"#;
        let node: CategoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "c1");
        assert!(node.parent_id.is_none());
        assert_eq!(node.count, 3);
    }
}
