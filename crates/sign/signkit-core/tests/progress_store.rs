use signkit_core::catalog::{self, categories};
use signkit_core::{KeyValueStore, MemoryStore, SignError, WatchedVideos, WATCHED_VIDEOS_KEY};

#[test]
fn save_and_reload_round_trip() {
    let mut store = MemoryStore::new();
    let mut watched = WatchedVideos::new();
    watched.mark_watched("q-why");
    watched.mark_watched("basic-hello");
    watched.save(&mut store).unwrap();

    let raw = store.get(WATCHED_VIDEOS_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"["basic-hello","q-why"]"#);

    let reloaded = WatchedVideos::load(&store);
    assert_eq!(reloaded, watched);
}

#[test]
fn unwatching_the_last_video_survives_reload() {
    let mut store = MemoryStore::new();
    let mut watched = WatchedVideos::new();
    assert!(watched.toggle("num-0"));
    watched.save(&mut store).unwrap();

    assert!(!watched.toggle("num-0"));
    watched.save(&mut store).unwrap();
    assert_eq!(store.get(WATCHED_VIDEOS_KEY).unwrap(), None);
    assert!(!WatchedVideos::load(&store).is_watched("num-0"));
}

#[test]
fn reset_clears_memory_and_store() {
    let mut store = MemoryStore::new();
    let mut watched = WatchedVideos::new();
    watched.mark_watched("num-0");
    watched.save(&mut store).unwrap();

    watched.reset(&mut store).unwrap();
    assert!(watched.is_empty());
    assert_eq!(store.get(WATCHED_VIDEOS_KEY).unwrap(), None);
}

#[test]
fn malformed_or_missing_entries_load_empty() {
    let mut store = MemoryStore::new();
    assert!(WatchedVideos::load(&store).is_empty());
    store.set(WATCHED_VIDEOS_KEY, "{not json").unwrap();
    assert!(WatchedVideos::load(&store).is_empty());
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SignError> {
        Err(SignError::Storage {
            reason: "quota".into(),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), SignError> {
        Err(SignError::Storage {
            reason: "quota".into(),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<(), SignError> {
        Ok(())
    }
}

#[test]
fn storage_failures_are_local() {
    let mut store = BrokenStore;
    let mut watched = WatchedVideos::load(&store);
    assert!(watched.is_empty());
    watched.mark_watched("num-1");
    assert!(matches!(
        watched.save(&mut store),
        Err(SignError::Storage { .. })
    ));
    assert!(watched.is_watched("num-1"));
}

#[test]
fn category_progress() {
    let basic = &categories()[0];
    let mut watched = WatchedVideos::new();
    for video in basic.videos.iter().take(2) {
        watched.mark_watched(video.id);
    }
    assert_eq!(watched.watched_in(basic), 2);
    assert!(!watched.is_category_complete(basic));

    watched.mark_watched("basic-thank-you");
    assert!(watched.is_category_complete(basic));

    let total = catalog::all_videos().count();
    assert_eq!(watched.percent_complete(total), 6); // 3 of 54
}
