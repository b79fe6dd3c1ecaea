//! Saved-for-later list.
//!
//! Entries copy the item's display fields when they are added, so a saved
//! entry keeps showing what the user saved even if the catalog changes.

use serde::{Deserialize, Serialize};

use crate::catalog::{ContentItem, ContentType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchLaterEntry {
    pub unique_id: String,
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl WatchLaterEntry {
    pub fn snapshot(item: &ContentItem) -> Self {
        Self {
            unique_id: unique_id(item.content_type(), item.id),
            content_type: item.content_type(),
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
            genres: item.genres.clone(),
        }
    }
}

/// `"<type>-<id>"`, one per catalog item
pub fn unique_id(content_type: ContentType, id: usize) -> String {
    format!("{}-{}", content_type.as_str(), id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchLater {
    entries: Vec<WatchLaterEntry>,
}

impl WatchLater {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut list: WatchLater = serde_json::from_str(json)?;
        // Older writers may have stored duplicates; keep the first of each.
        let mut seen = std::collections::HashSet::new();
        list.entries.retain(|entry| seen.insert(entry.unique_id.clone()));
        Ok(list)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn add(&mut self, item: &ContentItem) -> AddOutcome {
        if self.contains(item.content_type(), item.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.push(WatchLaterEntry::snapshot(item));
        AddOutcome::Added
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, content_type: ContentType, id: usize) -> bool {
        let key = unique_id(content_type, id);
        let before = self.entries.len();
        self.entries.retain(|entry| entry.unique_id != key);
        self.entries.len() != before
    }

    pub fn contains(&self, content_type: ContentType, id: usize) -> bool {
        let key = unique_id(content_type, id);
        self.entries.iter().any(|entry| entry.unique_id == key)
    }

    /// Entries in insertion order
    pub fn list(&self) -> &[WatchLaterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
