//! In-memory tag map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from file identifier to the tags attached to it.
///
/// Tags keep insertion order and duplicates are allowed: adding the same tag
/// twice stores it twice, and removal only drops the first occurrence.
///
/// Serializes as a plain JSON object of string arrays:
///
/// ```json
/// {"/home/me/notes.txt": ["work", "draft"]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl TagMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags for `identifier`, empty when it has none
    #[must_use]
    pub fn tags_for(&self, identifier: &str) -> &[String] {
        self.entries
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append `tag` to the tags of `identifier`
    pub fn add(&mut self, identifier: &str, tag: &str) {
        self.entries
            .entry(identifier.to_string())
            .or_default()
            .push(tag.to_string());
    }

    /// Remove the first occurrence of `tag` from `identifier`
    ///
    /// Returns `true` if a tag was removed. An identifier left without tags
    /// is dropped from the map.
    pub fn remove(&mut self, identifier: &str, tag: &str) -> bool {
        let Some(tags) = self.entries.get_mut(identifier) else {
            return false;
        };
        let Some(pos) = tags.iter().position(|t| t == tag) else {
            return false;
        };
        tags.remove(pos);
        if tags.is_empty() {
            self.entries.remove(identifier);
        }
        true
    }

    /// Number of tagged identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is tagged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
