//! Content Context
//!
//! The browser-backed `ContentStore`, shared with every section through the
//! Leptos Context API. Operations that fail to persist are logged and shown
//! to the editor in a blocking alert; the on-screen change is kept. An add
//! with an id already in use is refused the same way.

use content_store::{
    BrowserStorage, ContentStore, Defaults, GalleryItem, KeyLayout, KeyValueStorage,
    MemoryStorage, ScheduleEvent, SocialLink, StorageResult, StoreConfig, StoreError, StoreResult,
};
use leptos::prelude::*;

/// Storage key prefix and version used by the deployed site
const KEY_PREFIX: &str = "rilliex";
const KEY_VERSION: u32 = 1;

/// localStorage when the browser allows it, memory otherwise
pub enum SiteStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl SiteStorage {
    fn open() -> Self {
        match BrowserStorage::local() {
            Ok(storage) => SiteStorage::Browser(storage),
            Err(e) => {
                log::warn!("localStorage unavailable, edits will not be saved: {}", e);
                SiteStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for SiteStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            SiteStorage::Browser(s) => s.get_item(key),
            SiteStorage::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            SiteStorage::Browser(s) => s.set_item(key, value),
            SiteStorage::Memory(s) => s.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        match self {
            SiteStorage::Browser(s) => s.remove_item(key),
            SiteStorage::Memory(s) => s.remove_item(key),
        }
    }
}

pub fn site_config() -> StoreConfig {
    StoreConfig::default().with_keys(KeyLayout::namespaced(KEY_PREFIX, KEY_VERSION))
}

/// Site content provided via context
#[derive(Clone, Copy)]
pub struct ContentContext {
    store: RwSignal<ContentStore<SiteStorage>, LocalStorage>,
}

impl ContentContext {
    /// Load content from storage. Runs once, before the first render.
    pub fn open() -> Self {
        let store = ContentStore::open(SiteStorage::open(), site_config(), Defaults::bundled());
        log::info!(
            "Loaded {} gallery items, {} schedule events, {} social links",
            store.gallery().len(),
            store.schedule().len(),
            store.social_links().len()
        );
        Self { store: RwSignal::new_local(store) }
    }

    // Readers borrow the stored collections; gallery URLs can be
    // multi-megabyte data URLs.

    pub fn with_gallery<R>(&self, f: impl FnOnce(&[GalleryItem]) -> R) -> R {
        self.store.with(|s| f(s.gallery()))
    }

    pub fn with_schedule<R>(&self, f: impl FnOnce(&[ScheduleEvent]) -> R) -> R {
        self.store.with(|s| f(s.schedule()))
    }

    pub fn with_social_links<R>(&self, f: impl FnOnce(&[SocialLink]) -> R) -> R {
        self.store.with(|s| f(s.social_links()))
    }

    pub fn with_hero_image<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.store.with(|s| f(s.hero_image()))
    }

    pub fn with_profile_image<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.store.with(|s| f(s.profile_image()))
    }

    /// One gallery item by id
    pub fn gallery_item(&self, id: &str) -> Option<GalleryItem> {
        self.with_gallery(|items| items.iter().find(|item| item.id == id).cloned())
    }

    pub fn add_gallery_item(&self, item: GalleryItem) {
        self.apply(|s| s.add_gallery_item(item));
    }

    pub fn update_gallery_item(&self, item: GalleryItem) {
        self.apply(|s| s.update_gallery_item(item));
    }

    pub fn remove_gallery_item(&self, id: &str) {
        self.apply(|s| s.remove_gallery_item(id));
    }

    pub fn add_schedule_event(&self, event: ScheduleEvent) {
        self.apply(|s| s.add_schedule_event(event));
    }

    pub fn update_schedule_event(&self, event: ScheduleEvent) {
        self.apply(|s| s.update_schedule_event(event));
    }

    pub fn delete_schedule_event(&self, id: &str) {
        self.apply(|s| s.delete_schedule_event(id));
    }

    pub fn add_social_link(&self, link: SocialLink) {
        self.apply(|s| s.add_social_link(link));
    }

    pub fn update_social_link(&self, link: SocialLink) {
        self.apply(|s| s.update_social_link(link));
    }

    pub fn delete_social_link(&self, id: &str) {
        self.apply(|s| s.delete_social_link(id));
    }

    pub fn set_hero_image(&self, url: String) {
        self.apply(|s| s.set_hero_image(url));
    }

    pub fn set_profile_image(&self, url: String) {
        self.apply(|s| s.set_profile_image(url));
    }

    fn apply(&self, op: impl FnOnce(&mut ContentStore<SiteStorage>) -> StoreResult<()>) {
        if let Some(Err(err)) = self.store.try_update(op) {
            report_failure(&err);
        }
    }
}

/// Get the content context
pub fn use_content() -> ContentContext {
    expect_context::<ContentContext>()
}

fn report_failure(err: &StoreError) {
    log::error!("{}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&err.user_message());
    }
}
