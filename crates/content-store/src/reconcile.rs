//! Load-time Reconciliation
//!
//! Each collection is read from storage once, independently, and checked
//! against the bundled defaults. Nothing here can fail: bad or stale data
//! is logged and replaced by the default.

use log::{debug, error, warn};
use serde::de::DeserializeOwned;

use crate::config::{Collection, StoreConfig};
use crate::defaults::Defaults;
use crate::model::{GalleryItem, ScheduleEvent, SocialLink};
use crate::storage::KeyValueStorage;

/// Why a collection came from the defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Key never written
    Missing,
    /// Stored value did not parse as the expected records
    Malformed,
    /// Stored value referenced a retired image host
    Legacy,
    /// Stored value is deliberately thrown away on load
    Discarded,
    /// Storage read itself failed
    Unreadable,
}

/// Where a loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Stored,
    /// Stored records combined with defaults
    Merged,
    Defaulted(Fallback),
}

/// A loaded value together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    fn stored(value: T) -> Self {
        Self { value, source: LoadSource::Stored }
    }

    fn defaulted(value: T, reason: Fallback) -> Self {
        Self { value, source: LoadSource::Defaulted(reason) }
    }
}

/// Load origin of every collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub gallery: LoadSource,
    pub schedule: LoadSource,
    pub hero: LoadSource,
    pub profile: LoadSource,
    pub social: LoadSource,
}

impl LoadReport {
    pub fn source(&self, collection: Collection) -> LoadSource {
        match collection {
            Collection::Gallery => self.gallery,
            Collection::Schedule => self.schedule,
            Collection::Hero => self.hero,
            Collection::Profile => self.profile,
            Collection::Social => self.social,
        }
    }
}

/// Raw read, with read errors folded into `Err(Fallback)`
fn read_raw<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    collection: Collection,
) -> Result<Option<String>, Fallback> {
    let key = config.key(collection);
    storage.get_item(&key).map_err(|e| {
        warn!("Failed to read {} from storage, using defaults: {}", key, e);
        Fallback::Unreadable
    })
}

/// Read and parse a JSON list
fn read_list<S, T>(
    storage: &S,
    config: &StoreConfig,
    collection: Collection,
) -> Result<Vec<T>, Fallback>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    let raw = read_raw(storage, config, collection)?.ok_or(Fallback::Missing)?;
    serde_json::from_str(&raw).map_err(|e| {
        error!("Failed to parse saved {}, falling back to defaults: {}", collection, e);
        Fallback::Malformed
    })
}

pub fn load_gallery<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    defaults: &Defaults,
) -> Loaded<Vec<GalleryItem>> {
    match read_list::<_, GalleryItem>(storage, config, Collection::Gallery) {
        Ok(items) if items.iter().any(|item| config.is_legacy_reference(&item.url)) => {
            debug!("Saved gallery references a legacy image host, using bundled gallery");
            Loaded::defaulted(defaults.gallery.clone(), Fallback::Legacy)
        }
        Ok(items) => Loaded::stored(items),
        Err(reason) => Loaded::defaulted(defaults.gallery.clone(), reason),
    }
}

/// Always starts from the defaults and clears whatever was stored.
///
/// Schedule persistence is being retired; edits are still written back
/// during a session but do not survive the next load.
pub fn load_schedule<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    defaults: &Defaults,
) -> Loaded<Vec<ScheduleEvent>> {
    let key = config.key(Collection::Schedule);
    let reason = match read_raw(storage, config, Collection::Schedule) {
        Ok(Some(_)) => {
            if let Err(e) = storage.remove_item(&key) {
                error!("Failed to remove saved schedule: {}", e);
            }
            Fallback::Discarded
        }
        Ok(None) => Fallback::Missing,
        Err(reason) => reason,
    };
    Loaded::defaulted(defaults.schedule.clone(), reason)
}

pub fn load_hero_image<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    defaults: &Defaults,
) -> Loaded<String> {
    match read_raw(storage, config, Collection::Hero) {
        Ok(Some(saved)) if !saved.is_empty() => Loaded::stored(saved),
        Ok(_) => Loaded::defaulted(defaults.hero_image.clone(), Fallback::Missing),
        Err(reason) => Loaded::defaulted(defaults.hero_image.clone(), reason),
    }
}

pub fn load_profile_image<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    defaults: &Defaults,
) -> Loaded<String> {
    match read_raw(storage, config, Collection::Profile) {
        Ok(Some(saved)) if config.is_legacy_reference(&saved) => {
            debug!("Saved profile image is a legacy remote reference, using bundled image");
            Loaded::defaulted(defaults.profile_image.clone(), Fallback::Legacy)
        }
        Ok(Some(saved)) if !saved.is_empty() => Loaded::stored(saved),
        Ok(_) => Loaded::defaulted(defaults.profile_image.clone(), Fallback::Missing),
        Err(reason) => Loaded::defaulted(defaults.profile_image.clone(), reason),
    }
}

pub fn load_social_links<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    defaults: &Defaults,
) -> Loaded<Vec<SocialLink>> {
    match read_list::<_, SocialLink>(storage, config, Collection::Social) {
        Ok(stored) => Loaded {
            value: merge_social_links(&defaults.social, &stored),
            source: LoadSource::Merged,
        },
        Err(reason) => Loaded::defaulted(defaults.social.clone(), reason),
    }
}

/// Combine stored links with the default set.
///
/// Every default platform appears once, in default order, taking the first
/// stored link for that platform if there is one. Stored links on platforms
/// the defaults do not know are appended in stored order.
pub fn merge_social_links(defaults: &[SocialLink], stored: &[SocialLink]) -> Vec<SocialLink> {
    let merged = defaults.iter().map(|default_link| {
        stored
            .iter()
            .find(|s| s.platform == default_link.platform)
            .unwrap_or(default_link)
            .clone()
    });
    let additional = stored
        .iter()
        .filter(|s| !defaults.iter().any(|d| d.platform == s.platform))
        .cloned();
    merged.chain(additional).collect()
}
