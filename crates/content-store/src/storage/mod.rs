//! Durable Storage
//!
//! Abstract string key-value storage, shaped after the Web Storage API.
//! Backends are single-threaded; every method takes `&self`.

mod memory;
#[cfg(feature = "web")]
mod browser;

pub use memory::MemoryStorage;
#[cfg(feature = "web")]
pub use browser::BrowserStorage;

use crate::error::StorageResult;

/// String key-value storage surviving across sessions
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` if the key was never written.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
