//! Content Store
//!
//! Owns the user-editable site content (gallery, schedule, social links,
//! hero and profile images), loads it from durable key-value storage and
//! writes every change straight back.
//!
//! # Layout
//!
//! - [`model`] - plain records stored in each collection
//! - [`storage`] - the [`KeyValueStorage`] trait and its backends
//! - [`config`] - storage keys and legacy-reference detection
//! - [`defaults`] - the bundled dataset used when storage has nothing usable
//! - [`reconcile`] - load-time rules combining storage with defaults
//! - [`store`] - [`ContentStore`], the single entry point for callers
//!
//! Malformed or stale stored data never fails a load: every collection
//! falls back to its default. Write failures are returned to the caller
//! but the in-memory change is kept.

pub mod config;
pub mod defaults;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod storage;
pub mod store;

mod collection;

#[cfg(test)]
mod tests;

pub use config::{Collection, KeyLayout, StoreConfig};
pub use defaults::Defaults;
pub use error::{StorageError, StorageResult, StoreError, StoreResult};
pub use model::{
    GalleryItem, Keyed, MediaKind, Platform, ScheduleEvent, SocialLink, Transform, Weekday,
};
pub use reconcile::{merge_social_links, Fallback, LoadReport, LoadSource, Loaded};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::ContentStore;

#[cfg(feature = "web")]
pub use storage::BrowserStorage;
