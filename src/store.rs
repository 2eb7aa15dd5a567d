//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over state that
//! is never persisted.

use leptos::prelude::*;
use reactive_stores::Store;
use content_store::GalleryItem;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Editing controls visible
    pub edit_mode: bool,
    /// Gallery item open in the lightbox
    pub lightbox: Option<GalleryItem>,
    /// Schedule event loaded into the form
    pub editing_event: Option<String>,
    /// Social link loaded into the form
    pub editing_link: Option<String>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the view store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip edit mode, dropping any half-edited form
pub fn store_toggle_edit_mode(store: &UiStore) {
    let enabled = !store.edit_mode().get_untracked();
    store.edit_mode().set(enabled);
    if !enabled {
        store.editing_event().set(None);
        store.editing_link().set(None);
    }
    log::info!("Edit mode {}", if enabled { "on" } else { "off" });
}

pub fn store_open_lightbox(store: &UiStore, item: GalleryItem) {
    store.lightbox().set(Some(item));
}

pub fn store_close_lightbox(store: &UiStore) {
    store.lightbox().set(None);
}
