//! Store Configuration
//!
//! Storage key layout and the markers used to spot legacy stored data.

use std::fmt;

/// The five independently persisted pieces of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Gallery,
    Schedule,
    Hero,
    Profile,
    Social,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Gallery,
        Collection::Schedule,
        Collection::Hero,
        Collection::Profile,
        Collection::Social,
    ];

    /// Bare storage key name
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Gallery => "gallery",
            Collection::Schedule => "schedule",
            Collection::Hero => "hero",
            Collection::Profile => "profile",
            Collection::Social => "social",
        }
    }

    /// Notice shown when a write-back of this collection fails
    pub fn write_failure_message(&self) -> String {
        match self {
            Collection::Gallery => "Storage full! Try deleting some old photos.".to_string(),
            Collection::Hero => "Hero image too large to save.".to_string(),
            Collection::Profile => "Profile image too large to save.".to_string(),
            Collection::Schedule | Collection::Social => format!("Could not save {}.", self.name()),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How collections map onto storage keys
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyLayout {
    /// `gallery`, `schedule`, ...
    #[default]
    Bare,
    /// `<prefix>_gallery_v<version>`, ...
    Namespaced { prefix: String, version: u32 },
}

impl KeyLayout {
    pub fn namespaced(prefix: impl Into<String>, version: u32) -> Self {
        KeyLayout::Namespaced { prefix: prefix.into(), version }
    }

    pub fn key(&self, collection: Collection) -> String {
        match self {
            KeyLayout::Bare => collection.name().to_string(),
            KeyLayout::Namespaced { prefix, version } => {
                format!("{}_{}_v{}", prefix, collection.name(), version)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub keys: KeyLayout,
    /// Substrings of media URLs from a retired image host
    pub legacy_hosts: Vec<String>,
}

impl StoreConfig {
    pub fn with_keys(mut self, keys: KeyLayout) -> Self {
        self.keys = keys;
        self
    }

    pub fn key(&self, collection: Collection) -> String {
        self.keys.key(collection)
    }

    pub fn is_legacy_reference(&self, url: &str) -> bool {
        self.legacy_hosts.iter().any(|host| url.contains(host.as_str()))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            keys: KeyLayout::Bare,
            legacy_hosts: vec!["images.unsplash.com".to_string()],
        }
    }
}
