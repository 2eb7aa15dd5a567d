//! `window.localStorage` backend

use wasm_bindgen::{JsCast, JsValue};

use crate::error::{StorageError, StorageResult};
use super::KeyValueStorage;

/// Legacy numeric code of `QuotaExceededError`
const QUOTA_EXCEEDED_CODE: u16 = 22;

/// Origin-scoped browser storage
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    ///
    /// Fails outside a browser window or when storage is disabled
    /// (some private browsing modes).
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded { key: key.to_string() }
            } else {
                StorageError::Unavailable(describe(&e))
            }
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    match err.dyn_ref::<web_sys::DomException>() {
        // Firefox reports its own name
        Some(ex) => {
            let name = ex.name();
            ex.code() == QUOTA_EXCEEDED_CODE
                || name == "QuotaExceededError"
                || name == "NS_ERROR_DOM_QUOTA_REACHED"
        }
        None => false,
    }
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) => format!("{}: {}", ex.name(), ex.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}
