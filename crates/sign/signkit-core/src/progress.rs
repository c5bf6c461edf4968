//! Watched-video progress and its key/value persistence.
//!
//! The set is stored as a JSON array of video ids under [`WATCHED_VIDEOS_KEY`].
//! Reading is forgiving: a missing or malformed entry yields an empty set.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use log::warn;

use crate::catalog::VideoCategory;
use crate::error::SignError;

pub const WATCHED_VIDEOS_KEY: &str = "signlang-watched-videos";

/// Minimal string store (browser local storage, a file, memory).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SignError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SignError>;
    fn remove(&mut self, key: &str) -> Result<(), SignError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SignError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SignError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SignError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchedVideos {
    ids: BTreeSet<String>,
}

impl WatchedVideos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the saved set. Store failures and malformed JSON are logged and
    /// treated as "nothing watched yet".
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(WATCHED_VIDEOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!("Failed to read watched videos: {err}");
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(err) => {
                warn!("Failed to parse saved progress: {err}");
                Self::default()
            }
        }
    }

    /// Persist the set. An empty set removes the entry.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), SignError> {
        if self.ids.is_empty() {
            return store.remove(WATCHED_VIDEOS_KEY);
        }
        let ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        store.set(WATCHED_VIDEOS_KEY, &serde_json::to_string(&ids)?)
    }

    /// Forget everything, in memory and in the store.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SignError> {
        self.ids.clear();
        store.remove(WATCHED_VIDEOS_KEY)
    }

    /// Returns true if the id was not already watched.
    pub fn mark_watched(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Returns true if the id was watched.
    pub fn mark_unwatched(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip the state; returns the new "watched" value.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.mark_unwatched(id) {
            false
        } else {
            self.mark_watched(id)
        }
    }

    pub fn is_watched(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Rounded percentage of `total` videos watched.
    pub fn percent_complete(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.ids.len() as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn watched_in(&self, category: &VideoCategory) -> usize {
        category
            .videos
            .iter()
            .filter(|v| self.is_watched(v.id))
            .count()
    }

    pub fn is_category_complete(&self, category: &VideoCategory) -> bool {
        !category.videos.is_empty() && self.watched_in(category) == category.videos.len()
    }
}
