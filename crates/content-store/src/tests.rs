//! Store Scenario Tests
//!
//! End-to-end behaviour of `ContentStore` over in-memory storage.

use crate::config::{Collection, KeyLayout, StoreConfig};
use crate::defaults::Defaults;
use crate::error::{StorageError, StoreError};
use crate::model::{GalleryItem, MediaKind, Platform, SocialLink};
use crate::reconcile::{Fallback, LoadSource};
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::store::ContentStore;

fn photo(id: &str) -> GalleryItem {
    GalleryItem::new(id, format!("data:image/jpeg;base64,{}", id), MediaKind::Image)
}

fn empty_store() -> ContentStore<MemoryStorage> {
    ContentStore::open(MemoryStorage::new(), StoreConfig::default(), Defaults::empty())
}

fn gallery_ids<S: KeyValueStorage>(store: &ContentStore<S>) -> Vec<String> {
    store.gallery().iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_fresh_storage_yields_bundled_defaults() {
    let store = ContentStore::with_defaults(MemoryStorage::new());
    let defaults = Defaults::bundled();

    assert_eq!(store.gallery(), defaults.gallery.as_slice());
    assert_eq!(store.schedule(), defaults.schedule.as_slice());
    assert_eq!(store.social_links(), defaults.social.as_slice());
    assert_eq!(store.hero_image(), defaults.hero_image);
    assert_eq!(store.profile_image(), defaults.profile_image);

    for collection in Collection::ALL {
        assert_eq!(
            store.load_report().source(collection),
            LoadSource::Defaulted(Fallback::Missing)
        );
    }
}

#[test]
fn test_loading_does_not_write() {
    let store = ContentStore::with_defaults(MemoryStorage::new());
    assert!(store.storage().is_empty());
}

#[test]
fn test_add_then_remove_gallery_item() {
    let mut store = empty_store();

    store
        .add_gallery_item(GalleryItem::new("p1", "data:...", MediaKind::Image))
        .unwrap();
    assert_eq!(gallery_ids(&store), vec!["p1"]);

    store.remove_gallery_item("p1").unwrap();
    assert!(store.gallery().is_empty());
    assert_eq!(store.storage().get_item("gallery").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_gallery_survives_reopen() {
    let storage = MemoryStorage::new();
    {
        let mut store = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
        store.add_gallery_item(photo("fresh")).unwrap();
        store.remove_gallery_item("p3").unwrap();
    }

    let reopened = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
    assert_eq!(reopened.load_report().gallery, LoadSource::Stored);
    assert_eq!(reopened.gallery().len(), 12);
    assert_eq!(reopened.gallery()[0].id, "fresh");
    assert!(reopened.gallery().iter().all(|p| p.id != "p3"));
}

#[test]
fn test_schedule_not_restored_after_reopen() {
    let storage = MemoryStorage::new();
    {
        let mut store = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
        store
            .add_schedule_event(crate::model::ScheduleEvent {
                id: "e1".to_string(),
                day: crate::model::Weekday::Tue,
                time: "18:00".to_string(),
                title_en: "Match".to_string(),
                title_zh: "比赛".to_string(),
                location: None,
                kind: None,
            })
            .unwrap();
        assert!(storage.contains("schedule"));
    }

    let reopened = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
    assert!(reopened.schedule().is_empty());
    assert_eq!(
        reopened.load_report().schedule,
        LoadSource::Defaulted(Fallback::Discarded)
    );
    assert!(!storage.contains("schedule"));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = ContentStore::with_defaults(MemoryStorage::new());
    let before = store.gallery().to_vec();

    store.update_gallery_item(photo("nope")).unwrap();
    assert_eq!(store.gallery(), before.as_slice());

    let mut cropped = store.gallery()[4].clone();
    cropped.transform = Some(crate::model::Transform { x: 12.0, y: -3.0, scale: 1.6 });
    store.update_gallery_item(cropped.clone()).unwrap();
    assert_eq!(store.gallery()[4], cropped);
    assert_eq!(store.gallery().len(), before.len());
}

#[test]
fn test_delete_keeps_relative_order() {
    let mut store = ContentStore::with_defaults(MemoryStorage::new());
    store.remove_gallery_item("p5").unwrap();
    store.delete_social_link("s2").unwrap();

    let expected: Vec<String> = (1..=12).filter(|n| *n != 5).map(|n| format!("p{}", n)).collect();
    assert_eq!(gallery_ids(&store), expected);

    let social: Vec<&str> = store.social_links().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(social, vec!["s1", "s3", "s4"]);
}

#[test]
fn test_social_link_appended_and_merged_on_reopen() {
    let storage = MemoryStorage::new();
    {
        let mut store = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
        let mut youtube = store.social_links()[0].clone();
        youtube.followers = "75K".to_string();
        store.update_social_link(youtube).unwrap();
        store
            .add_social_link(SocialLink {
                id: "1717".to_string(),
                platform: Platform::from("douyin"),
                handle: "rilliex".to_string(),
                url: "https://douyin.com".to_string(),
                followers: "10K".to_string(),
            })
            .unwrap();
        assert_eq!(store.social_links().last().unwrap().id, "1717");
    }

    let reopened = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
    assert_eq!(reopened.load_report().social, LoadSource::Merged);
    assert_eq!(reopened.social_links().len(), 5);
    assert_eq!(reopened.social_links()[0].followers, "75K");
    assert_eq!(reopened.social_links()[4].platform, Platform::Other("douyin".to_string()));
}

#[test]
fn test_deleted_default_social_link_comes_back() {
    let storage = MemoryStorage::new();
    {
        let mut store = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
        store.delete_social_link("s3").unwrap();
        assert_eq!(store.social_links().len(), 3);
    }

    let reopened = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
    assert_eq!(reopened.social_links(), Defaults::bundled().social.as_slice());
}

#[test]
fn test_legacy_profile_image_replaced() {
    let storage = MemoryStorage::with_entries([(
        "profile",
        "https://images.unsplash.com/photo-1554068865?w=400",
    )]);
    let store = ContentStore::with_defaults(storage);

    assert_eq!(store.profile_image(), Defaults::bundled().profile_image);
    assert_eq!(store.load_report().profile, LoadSource::Defaulted(Fallback::Legacy));
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut store = ContentStore::open(
        MemoryStorage::with_quota(64),
        StoreConfig::default(),
        Defaults::empty(),
    );

    let big = GalleryItem::new("big", format!("data:image/png;base64,{}", "A".repeat(200)), MediaKind::Image);
    let err = store.add_gallery_item(big).unwrap_err();

    assert_eq!(err.collection(), Collection::Gallery);
    assert!(matches!(
        err,
        StoreError::Persist { source: StorageError::QuotaExceeded { .. }, .. }
    ));
    assert_eq!(err.user_message(), "Storage full! Try deleting some old photos.");
    assert_eq!(gallery_ids(&store), vec!["big"]);
    assert!(!store.storage().contains("gallery"));

    // Freeing space lets the next write through
    store.remove_gallery_item("big").unwrap();
    assert_eq!(store.storage().get_item("gallery").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_hero_write_failure_reported() {
    let mut store = ContentStore::open(
        MemoryStorage::with_quota(32),
        StoreConfig::default(),
        Defaults::bundled(),
    );
    let err = store.set_hero_image("x".repeat(100)).unwrap_err();

    assert_eq!(err.collection(), Collection::Hero);
    assert_eq!(err.to_string(), "failed to save hero: storage quota exceeded while writing hero");
    assert_eq!(store.hero_image().len(), 100);
}

#[test]
fn test_namespaced_keys_used_for_reads_and_writes() {
    let config = StoreConfig::default().with_keys(KeyLayout::namespaced("rilliex", 1));
    let storage = MemoryStorage::with_entries([("rilliex_hero_v1", "/image/7.jpg")]);
    let mut store = ContentStore::open(storage, config, Defaults::bundled());

    assert_eq!(store.hero_image(), "/image/7.jpg");
    store.add_gallery_item(photo("n1")).unwrap();
    assert!(store.storage().contains("rilliex_gallery_v1"));
    assert!(!store.storage().contains("gallery"));
}

#[test]
fn test_adding_existing_gallery_id_changes_nothing() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::open(&storage, StoreConfig::default(), Defaults::bundled());
    store.add_gallery_item(photo("fresh")).unwrap();
    let saved_before = storage.get_item("gallery").unwrap();

    let err = store.add_gallery_item(photo("p3")).unwrap_err();
    assert!(matches!(
        &err,
        StoreError::DuplicateId { collection: Collection::Gallery, id } if id == "p3"
    ));
    assert_eq!(store.gallery().len(), 13);
    assert_eq!(store.gallery().iter().filter(|p| p.id == "p3").count(), 1);
    assert_eq!(storage.get_item("gallery").unwrap(), saved_before);

    // update and remove still address exactly one record
    let mut edited = store.gallery().iter().find(|p| p.id == "p3").unwrap().clone();
    edited.alt = "edited".to_string();
    store.update_gallery_item(edited).unwrap();
    store.remove_gallery_item("p3").unwrap();
    assert_eq!(store.gallery().len(), 12);
}

#[test]
fn test_adding_existing_default_id_on_fresh_storage_writes_nothing() {
    let mut store = ContentStore::with_defaults(MemoryStorage::new());

    let err = store.add_gallery_item(photo("p3")).unwrap_err();
    assert_eq!(err.collection(), Collection::Gallery);
    assert_eq!(store.gallery().len(), 12);
    assert!(!store.storage().contains("gallery"));
}

#[test]
fn test_adding_existing_schedule_and_social_ids_rejected() {
    let mut store = ContentStore::with_defaults(MemoryStorage::new());
    let event = crate::model::ScheduleEvent {
        id: "e1".to_string(),
        day: crate::model::Weekday::Mon,
        time: "09:00".to_string(),
        title_en: "Filming".to_string(),
        title_zh: String::new(),
        location: None,
        kind: None,
    };
    store.add_schedule_event(event.clone()).unwrap();
    let err = store.add_schedule_event(event).unwrap_err();
    assert_eq!(err.collection(), Collection::Schedule);
    assert_eq!(store.schedule().len(), 1);

    let duplicate = store.social_links()[1].clone();
    let err = store.add_social_link(duplicate).unwrap_err();
    assert_eq!(err.user_message(), "The social already has an entry with id s2.");
    assert_eq!(store.social_links().len(), 4);
}
