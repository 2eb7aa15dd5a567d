//! Gallery Section Component
//!
//! Square media grid, newest first. Edit mode adds an upload tile and
//! per-tile zoom and delete controls.

use content_store::{GalleryItem, MediaKind, Transform};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_content;
use crate::media;
use crate::store::{store_close_lightbox, store_open_lightbox, use_ui_store, UiStateStoreFields};

const ZOOM_STEP: f64 = 0.1;
const MIN_SCALE: f64 = 1.0;
const MAX_SCALE: f64 = 3.0;

#[component]
pub fn GallerySection() -> impl IntoView {
    let content = use_content();
    let ui = use_ui_store();

    let on_upload = move |ev: web_sys::Event| {
        let Some(file) = media::first_file(&ev) else { return };
        let kind = media::media_kind_for(&file.type_());
        spawn_local(async move {
            match media::read_as_data_url(&file).await {
                Ok(url) => content.add_gallery_item(GalleryItem::new(media::new_id(), url, kind)),
                Err(e) => media::report_read_failure(&e),
            }
        });
    };

    view! {
        <section id="gallery" class="gallery">
            <div class="section-header">
                <div>
                    <h2>"Gallery"</h2>
                    <p class="section-subtitle">"Latest uploads, trick shots, and behind the scenes."</p>
                </div>
                <Show when=move || ui.edit_mode().get()>
                    <span class="admin-badge">"Admin Mode Active"</span>
                </Show>
            </div>

            <div class="gallery-grid">
                <Show when=move || ui.edit_mode().get()>
                    <label class="gallery-upload-tile">
                        <span class="upload-plus">"+"</span>
                        <span class="upload-label">"Add Media"</span>
                        <input type="file" accept="image/*,video/*" class="hidden" on:change=on_upload />
                    </label>
                </Show>

                <For
                    each=move || content.with_gallery(tile_keys)
                    key=|tile| tile.clone()
                    children=move |(id, _)| {
                        content
                            .gallery_item(&id)
                            .map(|item| view! { <GalleryTile item=item /> })
                    }
                />
            </div>

            <Lightbox />
        </section>
    }
}

/// Tiles re-render when their id or crop changes
fn tile_keys(items: &[GalleryItem]) -> Vec<(String, Option<String>)> {
    items
        .iter()
        .map(|item| (item.id.clone(), item.transform.map(|t| t.to_css())))
        .collect()
}

#[component]
fn GalleryTile(item: GalleryItem) -> impl IntoView {
    let content = use_content();
    let ui = use_ui_store();

    let style = item
        .transform
        .map(|t| format!("transform: {}", t.to_css()))
        .unwrap_or_default();
    let media_view = match item.kind {
        MediaKind::Video => view! {
            <div class="tile-video">
                <video src=item.url.clone() class="tile-media" style=style muted=true playsinline=true />
                <span class="play-badge">"▶"</span>
            </div>
        }
        .into_any(),
        MediaKind::Image => view! {
            <img src=item.url.clone() alt=item.alt.clone() class="tile-media" style=style />
        }
        .into_any(),
    };

    let zoom = {
        let item = item.clone();
        move |delta: f64| {
            let mut updated = item.clone();
            let current = updated.transform.unwrap_or(Transform::IDENTITY);
            let scale = (current.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
            updated.transform = Some(Transform { scale, ..current });
            content.update_gallery_item(updated);
        }
    };
    let zoom_in = zoom.clone();
    let zoom_out = zoom;

    let id = item.id.clone();
    let on_delete = Callback::new(move |_| content.remove_gallery_item(&id));
    let lightbox_item = item.clone();

    view! {
        <div class="gallery-tile" on:click=move |_| store_open_lightbox(&ui, lightbox_item.clone())>
            {media_view}
            <Show when=move || ui.edit_mode().get()>
                <div class="tile-admin">
                    <DeleteConfirmButton button_class="tile-delete" on_confirm=on_delete />
                    <button
                        class="tile-zoom"
                        title="Zoom in"
                        on:click={
                            let zoom_in = zoom_in.clone();
                            move |ev| {
                                ev.stop_propagation();
                                zoom_in(ZOOM_STEP);
                            }
                        }
                    >
                        "+"
                    </button>
                    <button
                        class="tile-zoom"
                        title="Zoom out"
                        on:click={
                            let zoom_out = zoom_out.clone();
                            move |ev| {
                                ev.stop_propagation();
                                zoom_out(-ZOOM_STEP);
                            }
                        }
                    >
                        "−"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Lightbox() -> impl IntoView {
    let ui = use_ui_store();

    move || {
        ui.lightbox().get().map(|item| {
            let media_view = match item.kind {
                MediaKind::Video => view! {
                    <video src=item.url class="lightbox-media" controls=true autoplay=true />
                }
                .into_any(),
                MediaKind::Image => view! {
                    <img src=item.url alt=item.alt class="lightbox-media" />
                }
                .into_any(),
            };
            view! {
                <div class="lightbox" on:click=move |_| store_close_lightbox(&ui)>
                    <button class="lightbox-close" on:click=move |_| store_close_lightbox(&ui)>
                        "×"
                    </button>
                    <div class="lightbox-body" on:click=|ev| ev.stop_propagation()>
                        {media_view}
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_keys_follow_id_and_crop() {
        let mut items = vec![
            GalleryItem::new("a", "data:image/png;base64,AAAA", MediaKind::Image),
            GalleryItem::new("b", "/image/2.jpg", MediaKind::Image),
        ];
        items[0].transform = None;
        let before = tile_keys(&items);
        assert_eq!(before[0], ("a".to_string(), None));

        items[1].transform = Some(Transform { x: 0.0, y: 0.0, scale: 1.5 });
        let after = tile_keys(&items);
        assert_eq!(before[0], after[0]);
        assert_ne!(before[1], after[1]);
    }
}
