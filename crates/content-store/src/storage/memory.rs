use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{StorageError, StorageResult};
use super::KeyValueStorage;

/// In-memory storage for tests and non-browser targets.
///
/// An optional byte quota (keys plus values) makes writes fail the way a
/// full browser origin does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes pushing usage above `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self { entries: RefCell::default(), quota: Some(quota) }
    }

    /// Pre-populated storage, ignoring any quota
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RefCell::new(map), quota: None }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Bytes held across all keys and values
    pub fn used_bytes(&self) -> usize {
        self.entries.borrow().iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if let Some(quota) = self.quota {
            let replaced = entries.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let used: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
            if used - replaced + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_string() });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("hero").unwrap(), None);

        storage.set_item("hero", "/image/cover.jpg").unwrap();
        assert_eq!(storage.get_item("hero").unwrap().as_deref(), Some("/image/cover.jpg"));

        storage.remove_item("hero").unwrap();
        storage.remove_item("hero").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let storage = MemoryStorage::with_quota(16);
        storage.set_item("hero", "12345678").unwrap();

        let err = storage.set_item("profile", "123456789").unwrap_err();
        assert_eq!(err, StorageError::QuotaExceeded { key: "profile".to_string() });
        assert!(!storage.contains("profile"));
        assert_eq!(storage.used_bytes(), 12);
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let storage = MemoryStorage::with_quota(12);
        storage.set_item("hero", "12345678").unwrap();
        storage.set_item("hero", "abcdefgh").unwrap();
        assert_eq!(storage.get_item("hero").unwrap().as_deref(), Some("abcdefgh"));
    }
}
