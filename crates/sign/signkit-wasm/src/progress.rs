//! Watched-video progress backed by `window.localStorage`, plus catalog queries.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::Storage;

use signkit_core::catalog::{self, RELATED_LIMIT};
use signkit_core::{KeyValueStore, SignError, WatchedVideos};

use crate::to_js_error;

fn storage_error(e: JsValue) -> SignError {
    SignError::Storage {
        reason: format!("{e:?}"),
    }
}

struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    fn from_window() -> Result<Self, SignError> {
        let window = web_sys::window().ok_or_else(|| SignError::Storage {
            reason: "no window".into(),
        })?;
        let storage = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| SignError::Storage {
                reason: "localStorage unavailable".into(),
            })?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, SignError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SignError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), SignError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

#[wasm_bindgen]
pub struct VideoProgress {
    watched: WatchedVideos,
    store: LocalStorageStore,
}

#[wasm_bindgen]
impl VideoProgress {
    /// Load saved progress from local storage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<VideoProgress, JsError> {
        let store = LocalStorageStore::from_window().map_err(to_js_error)?;
        let watched = WatchedVideos::load(&store);
        Ok(VideoProgress { watched, store })
    }

    #[wasm_bindgen(js_name = isWatched)]
    pub fn is_watched(&self, id: String) -> bool {
        self.watched.is_watched(&id)
    }

    #[wasm_bindgen(js_name = markWatched)]
    pub fn mark_watched(&mut self, id: String) -> Result<bool, JsError> {
        let added = self.watched.mark_watched(&id);
        self.save()?;
        Ok(added)
    }

    #[wasm_bindgen(js_name = markUnwatched)]
    pub fn mark_unwatched(&mut self, id: String) -> Result<bool, JsError> {
        let removed = self.watched.mark_unwatched(&id);
        self.save()?;
        Ok(removed)
    }

    /// Returns the new watched state.
    #[wasm_bindgen]
    pub fn toggle(&mut self, id: String) -> Result<bool, JsError> {
        let now = self.watched.toggle(&id);
        self.save()?;
        Ok(now)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.watched.reset(&mut self.store).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = percentComplete)]
    pub fn percent_complete(&self) -> u32 {
        self.watched.percent_complete(catalog::all_videos().count())
    }

    /// Watched count for a category id; 0 for unknown ids.
    #[wasm_bindgen(js_name = watchedIn)]
    pub fn watched_in(&self, category_id: String) -> usize {
        catalog::categories()
            .iter()
            .find(|c| c.id == category_id)
            .map_or(0, |c| self.watched.watched_in(c))
    }

    #[wasm_bindgen(js_name = isCategoryComplete)]
    pub fn is_category_complete(&self, category_id: String) -> bool {
        catalog::categories()
            .iter()
            .find(|c| c.id == category_id)
            .is_some_and(|c| self.watched.is_category_complete(c))
    }

    #[wasm_bindgen]
    pub fn ids(&self) -> Result<JsValue, JsError> {
        let ids: Vec<&str> = self.watched.iter().collect();
        swb::to_value(&ids).map_err(to_js_error)
    }

    fn save(&mut self) -> Result<(), JsError> {
        self.watched.save(&mut self.store).map_err(to_js_error)
    }
}

#[wasm_bindgen(js_name = videoCategories)]
pub fn video_categories() -> Result<JsValue, JsError> {
    swb::to_value(catalog::categories()).map_err(to_js_error)
}

/// The video with `id`, or `undefined`.
#[wasm_bindgen(js_name = findVideo)]
pub fn find_video(id: String) -> Result<JsValue, JsError> {
    match catalog::find_video(&id) {
        Some(video) => swb::to_value(video).map_err(to_js_error),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = relatedVideos)]
pub fn related_videos(id: String, limit: Option<usize>) -> Result<JsValue, JsError> {
    let related = catalog::related_videos(&id, limit.unwrap_or(RELATED_LIMIT));
    swb::to_value(&related).map_err(to_js_error)
}
