//! Extracted metadata and exported record types.
//!
//! [`DocumentMetadata`] is what the header extractor produces for one file.
//! [`ParentRecord`] and [`ChildRecord`] are the exported shapes; a parent
//! holds its children in a [`ChildMap`], keyed by the child path exactly as
//! written in the parent's header.
//!
//! On the wire, a parent's children live under the `children_paths` key as a
//! JSON object, in the order the parent header listed them:
//!
//! ```json
//! {
//!   "filename": "parent.qmd",
//!   "title": "P",
//!   "description": null,
//!   "categories": ["x"],
//!   "children_paths": {
//!     "conteudo/child.qmd": {
//!       "filename": "conteudo/child.qmd",
//!       "title": "C",
//!       "description": null,
//!       "categories": []
//!     }
//!   }
//! }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Header fields recognized in a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title, if declared.
    pub title: Option<String>,
    /// Document description, if declared.
    pub description: Option<String>,
    /// Classification tags, in declaration order.
    pub categories: Vec<String>,
    /// Child document paths, in declaration order.
    pub children_paths: Vec<String>,
}

impl DocumentMetadata {
    /// Returns `true` if no field was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.categories.is_empty()
            && self.children_paths.is_empty()
    }
}

/// A document referenced from a parent header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    /// Child path as written in the parent header.
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
}

impl ChildRecord {
    /// Build a child record from extracted metadata. Grandchildren are dropped.
    pub fn from_metadata(filename: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            filename: filename.into(),
            title: metadata.title,
            description: metadata.description,
            categories: metadata.categories,
        }
    }
}

/// A top-level document and the children it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRecord {
    /// File name relative to the base directory.
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    /// Resolved children, keyed by child path.
    #[serde(rename = "children_paths")]
    pub children: ChildMap,
}

impl ParentRecord {
    /// Build a parent record with no children yet.
    ///
    /// The metadata's `children_paths` are not carried over; the caller
    /// resolves them and fills [`ParentRecord::children`].
    pub fn from_metadata(filename: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            filename: filename.into(),
            title: metadata.title,
            description: metadata.description,
            categories: metadata.categories,
            children: ChildMap::new(),
        }
    }
}

// ============================================================================
// ChildMap
// ============================================================================

/// Insertion-ordered map from child path to [`ChildRecord`].
///
/// Keys are unique. Re-inserting an existing key replaces its record in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChildMap {
    entries: Vec<(String, ChildRecord)>,
}

impl ChildMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the previous record for that key.
    pub fn insert(&mut self, key: impl Into<String>, record: ChildRecord) -> Option<ChildRecord> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, record)),
            None => {
                self.entries.push((key, record));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ChildRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChildRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for ChildMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for ChildMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct ChildMapVisitor;

impl<'de> Visitor<'de> for ChildMapVisitor {
    type Value = ChildMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of child paths to child records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ChildMap::new();
        while let Some((key, record)) = access.next_entry::<String, ChildRecord>()? {
            map.insert(key, record);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ChildMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ChildMapVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn child(path: &str, title: &str) -> ChildRecord {
        ChildRecord {
            filename: path.to_string(),
            title: Some(title.to_string()),
            description: None,
            categories: vec![],
        }
    }

    // ------------------------------------------------------------------------
    // ChildMap tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_child_map_preserves_insertion_order() {
        let mut map = ChildMap::new();
        map.insert("conteudo/z.qmd", child("conteudo/z.qmd", "Z"));
        map.insert("conteudo/a.qmd", child("conteudo/a.qmd", "A"));

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["conteudo/z.qmd", "conteudo/a.qmd"]);
    }

    #[test]
    fn test_child_map_reinsert_replaces_in_place() {
        let mut map = ChildMap::new();
        map.insert("a", child("a", "first"));
        map.insert("b", child("b", "B"));
        let previous = map.insert("a", child("a", "second"));

        assert_eq!(previous.unwrap().title.as_deref(), Some("first"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().next(), Some("a"));
        assert_eq!(map.get("a").unwrap().title.as_deref(), Some("second"));
    }

    #[test]
    fn test_child_map_serializes_as_ordered_object() {
        let mut map = ChildMap::new();
        map.insert("conteudo/b.qmd", child("conteudo/b.qmd", "B"));
        map.insert("conteudo/a.qmd", child("conteudo/a.qmd", "A"));

        let json = serde_json::to_string(&map).unwrap();
        let b = json.find("conteudo/b.qmd").unwrap();
        let a = json.find("conteudo/a.qmd").unwrap();
        assert!(json.starts_with('{'));
        assert!(b < a);

        let back: ChildMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_child_map_debug_renders_as_map() {
        let mut map = ChildMap::new();
        map.insert("k", child("k", "T"));
        let debug = format!("{map:?}");
        assert!(debug.starts_with("{\"k\": ChildRecord"));
    }

    // ------------------------------------------------------------------------
    // Record tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parent_record_json_shape() {
        let metadata = DocumentMetadata {
            title: Some("P".to_string()),
            description: None,
            categories: vec!["x".to_string()],
            children_paths: vec!["conteudo/child.qmd".to_string()],
        };
        let mut parent = ParentRecord::from_metadata("parent.qmd", metadata);
        parent
            .children
            .insert("conteudo/child.qmd", child("conteudo/child.qmd", "C"));

        let value = serde_json::to_value(&parent).unwrap();
        assert_eq!(value["filename"], "parent.qmd");
        assert_eq!(value["title"], "P");
        assert!(value["description"].is_null());
        assert_eq!(value["categories"], serde_json::json!(["x"]));
        assert_eq!(
            value["children_paths"]["conteudo/child.qmd"]["title"],
            "C"
        );
        assert!(value.get("children").is_none());
    }

    #[test]
    fn test_child_record_drops_grandchildren() {
        let metadata = DocumentMetadata {
            title: Some("C".to_string()),
            children_paths: vec!["conteudo/grandchild.qmd".to_string()],
            ..Default::default()
        };
        let record = ChildRecord::from_metadata("conteudo/child.qmd", metadata);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("children_paths").is_none());
    }

    #[test]
    fn test_metadata_is_empty() {
        assert!(DocumentMetadata::default().is_empty());
        let metadata = DocumentMetadata {
            categories: vec!["a".to_string()],
            ..Default::default()
        };
        assert!(!metadata.is_empty());
    }
}
