//! Content Store
//!
//! Every mutation updates memory first and then writes the whole affected
//! collection back. A failed write is returned, but the in-memory change
//! stays, so memory may run ahead of storage until the next good write.
//! Adding a record whose id is already present changes nothing.

use log::{debug, error, warn};
use serde::Serialize;

use crate::collection::{contains_id, remove_by_id, replace_by_id};
use crate::config::{Collection, StoreConfig};
use crate::defaults::Defaults;
use crate::error::{StoreError, StoreResult};
use crate::model::{GalleryItem, Keyed, ScheduleEvent, SocialLink};
use crate::reconcile::{self, LoadReport};
use crate::storage::KeyValueStorage;

/// Site content backed by durable storage
#[derive(Debug)]
pub struct ContentStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    gallery: Vec<GalleryItem>,
    schedule: Vec<ScheduleEvent>,
    social_links: Vec<SocialLink>,
    hero_image: String,
    profile_image: String,
    load_report: LoadReport,
}

impl<S: KeyValueStorage> ContentStore<S> {
    /// Load every collection from `storage`, reconciling with `defaults`.
    pub fn open(storage: S, config: StoreConfig, defaults: Defaults) -> Self {
        let gallery = reconcile::load_gallery(&storage, &config, &defaults);
        let schedule = reconcile::load_schedule(&storage, &config, &defaults);
        let hero = reconcile::load_hero_image(&storage, &config, &defaults);
        let profile = reconcile::load_profile_image(&storage, &config, &defaults);
        let social = reconcile::load_social_links(&storage, &config, &defaults);

        let load_report = LoadReport {
            gallery: gallery.source,
            schedule: schedule.source,
            hero: hero.source,
            profile: profile.source,
            social: social.source,
        };
        debug!("Content loaded: {:?}", load_report);

        Self {
            storage,
            config,
            gallery: gallery.value,
            schedule: schedule.value,
            social_links: social.value,
            hero_image: hero.value,
            profile_image: profile.value,
            load_report,
        }
    }

    /// Open with bare keys and the bundled defaults
    pub fn with_defaults(storage: S) -> Self {
        Self::open(storage, StoreConfig::default(), Defaults::bundled())
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn schedule(&self) -> &[ScheduleEvent] {
        &self.schedule
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn hero_image(&self) -> &str {
        &self.hero_image
    }

    pub fn profile_image(&self) -> &str {
        &self.profile_image
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Gallery
    // ========================

    /// Newest first
    pub fn add_gallery_item(&mut self, item: GalleryItem) -> StoreResult<()> {
        ensure_new_id(&self.gallery, &item, Collection::Gallery)?;
        self.gallery.insert(0, item);
        self.save_gallery()
    }

    pub fn update_gallery_item(&mut self, item: GalleryItem) -> StoreResult<()> {
        replace_by_id(&mut self.gallery, item);
        self.save_gallery()
    }

    pub fn remove_gallery_item(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.gallery, id);
        self.save_gallery()
    }

    // ========================
    // Schedule
    // ========================

    pub fn add_schedule_event(&mut self, event: ScheduleEvent) -> StoreResult<()> {
        ensure_new_id(&self.schedule, &event, Collection::Schedule)?;
        self.schedule.push(event);
        self.save_schedule()
    }

    pub fn update_schedule_event(&mut self, event: ScheduleEvent) -> StoreResult<()> {
        replace_by_id(&mut self.schedule, event);
        self.save_schedule()
    }

    pub fn delete_schedule_event(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.schedule, id);
        self.save_schedule()
    }

    // ========================
    // Social links
    // ========================

    pub fn add_social_link(&mut self, link: SocialLink) -> StoreResult<()> {
        ensure_new_id(&self.social_links, &link, Collection::Social)?;
        self.social_links.push(link);
        self.save_social_links()
    }

    pub fn update_social_link(&mut self, link: SocialLink) -> StoreResult<()> {
        replace_by_id(&mut self.social_links, link);
        self.save_social_links()
    }

    pub fn delete_social_link(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.social_links, id);
        self.save_social_links()
    }

    // ========================
    // Images
    // ========================

    pub fn set_hero_image(&mut self, url: impl Into<String>) -> StoreResult<()> {
        self.hero_image = url.into();
        self.write(Collection::Hero, &self.hero_image)
    }

    pub fn set_profile_image(&mut self, url: impl Into<String>) -> StoreResult<()> {
        self.profile_image = url.into();
        self.write(Collection::Profile, &self.profile_image)
    }

    // ========================
    // Write-back
    // ========================

    fn save_gallery(&self) -> StoreResult<()> {
        self.write_json(Collection::Gallery, &self.gallery)
    }

    fn save_schedule(&self) -> StoreResult<()> {
        self.write_json(Collection::Schedule, &self.schedule)
    }

    fn save_social_links(&self) -> StoreResult<()> {
        self.write_json(Collection::Social, &self.social_links)
    }

    fn write_json<T: Serialize + ?Sized>(&self, collection: Collection, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value).map_err(|source| {
            error!("Failed to encode {}: {}", collection, source);
            StoreError::Encode { collection, source }
        })?;
        self.write(collection, &json)
    }

    fn write(&self, collection: Collection, value: &str) -> StoreResult<()> {
        let key = self.config.key(collection);
        self.storage.set_item(&key, value).map_err(|source| {
            error!("Failed to save {} ({} bytes): {}", collection, value.len(), source);
            StoreError::Persist { collection, source }
        })
    }
}

/// Reject a record whose id is already taken, before anything changes
fn ensure_new_id<T: Keyed>(items: &[T], record: &T, collection: Collection) -> StoreResult<()> {
    if contains_id(items, record.id()) {
        warn!("Refusing to add {} record with existing id {}", collection, record.id());
        return Err(StoreError::DuplicateId { collection, id: record.id().to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaKind, Weekday};
    use crate::storage::MemoryStorage;

    fn event(id: &str, day: Weekday) -> ScheduleEvent {
        ScheduleEvent {
            id: id.to_string(),
            day,
            time: "10:00".to_string(),
            title_en: format!("Event {}", id),
            title_zh: String::new(),
            location: None,
            kind: None,
        }
    }

    #[test]
    fn test_add_gallery_item_prepends() {
        let mut store = ContentStore::with_defaults(MemoryStorage::new());
        store
            .add_gallery_item(GalleryItem::new("new", "data:image/png;base64,AA", MediaKind::Image))
            .unwrap();

        assert_eq!(store.gallery()[0].id, "new");
        assert_eq!(store.gallery().len(), 13);
        assert_eq!(store.gallery()[1].id, "p1");
    }

    #[test]
    fn test_schedule_appends_and_persists() {
        let mut store = ContentStore::with_defaults(MemoryStorage::new());
        store.add_schedule_event(event("e1", Weekday::Mon)).unwrap();
        store.add_schedule_event(event("e2", Weekday::Sat)).unwrap();

        let ids: Vec<&str> = store.schedule().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);

        let raw = store.storage().get_item("schedule").unwrap().unwrap();
        let saved: Vec<ScheduleEvent> = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved, store.schedule());
    }

    #[test]
    fn test_update_schedule_event() {
        let mut store = ContentStore::with_defaults(MemoryStorage::new());
        store.add_schedule_event(event("e1", Weekday::Mon)).unwrap();

        let mut changed = event("e1", Weekday::Fri);
        changed.location = Some("Perth".to_string());
        store.update_schedule_event(changed.clone()).unwrap();
        assert_eq!(store.schedule(), &[changed]);

        store.update_schedule_event(event("missing", Weekday::Sun)).unwrap();
        assert_eq!(store.schedule().len(), 1);
    }

    #[test]
    fn test_images_written_raw() {
        let mut store = ContentStore::with_defaults(MemoryStorage::new());
        store.set_hero_image("data:image/jpeg;base64,HERO").unwrap();
        store.set_profile_image("/image/2.jpg").unwrap();

        assert_eq!(store.hero_image(), "data:image/jpeg;base64,HERO");
        assert_eq!(
            store.storage().get_item("hero").unwrap().as_deref(),
            Some("data:image/jpeg;base64,HERO")
        );
        assert_eq!(store.storage().get_item("profile").unwrap().as_deref(), Some("/image/2.jpg"));
    }
}
