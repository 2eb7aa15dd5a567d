//! Social Section Component
//!
//! One card per platform link. Edit mode adds add/edit/delete.

use content_store::{Platform, SocialLink};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_content;
use crate::media;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Platform suggestions offered by the form
const KNOWN_PLATFORMS: &[&str] = &["youtube", "instagram", "bilibili", "xiaohongshu", "douyin", "tiktok"];

fn platform_label(platform: &Platform) -> String {
    match platform {
        Platform::Youtube => "YouTube".to_string(),
        Platform::Instagram => "Instagram".to_string(),
        Platform::Bilibili => "Bilibili".to_string(),
        Platform::Xiaohongshu => "Xiaohongshu".to_string(),
        Platform::Other(tag) => tag.clone(),
    }
}

#[component]
pub fn SocialSection() -> impl IntoView {
    let content = use_content();
    let ui = use_ui_store();

    let (platform, set_platform) = signal(String::from("youtube"));
    let (handle, set_handle) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (followers, set_followers) = signal(String::new());

    let reset_form = move || {
        set_platform.set(String::from("youtube"));
        set_handle.set(String::new());
        set_url.set(String::new());
        set_followers.set(String::new());
        ui.editing_link().set(None);
    };

    let start_edit = move |link: SocialLink| {
        set_platform.set(link.platform.to_string());
        set_handle.set(link.handle);
        set_url.set(link.url);
        set_followers.set(link.followers);
        ui.editing_link().set(Some(link.id));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let tag = platform.get_untracked().trim().to_lowercase();
        let link_url = url.get_untracked();
        if tag.is_empty() || link_url.trim().is_empty() {
            return;
        }
        let editing = ui.editing_link().get_untracked();
        let link = SocialLink {
            id: editing.clone().unwrap_or_else(media::new_id),
            platform: Platform::from(tag),
            handle: handle.get_untracked(),
            url: link_url,
            followers: followers.get_untracked(),
        };
        match editing {
            Some(_) => content.update_social_link(link),
            None => content.add_social_link(link),
        }
        reset_form();
    };

    view! {
        <section id="social" class="social">
            <div class="section-header">
                <div>
                    <h2>"Social Matrix"</h2>
                    <p class="section-subtitle">"Follow the journey across all platforms."</p>
                </div>
            </div>

            <div class="social-grid">
                {move || {
                    content
                        .with_social_links(<[SocialLink]>::to_vec)
                        .into_iter()
                        .map(|link| {
                            let id = link.id.clone();
                            let for_edit = link.clone();
                            view! {
                                <div class=format!("social-card social-{}", link.platform)>
                                    <span class="social-platform">{platform_label(&link.platform)}</span>
                                    <span class="social-handle">{link.handle.clone()}</span>
                                    <span class="social-followers">
                                        {link.followers.clone()} " Followers"
                                    </span>
                                    <a class="social-visit" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                        "Visit"
                                    </a>
                                    <Show when=move || ui.edit_mode().get()>
                                        <div class="card-admin">
                                            <button
                                                class="edit-btn"
                                                on:click={
                                                    let for_edit = for_edit.clone();
                                                    move |_| start_edit(for_edit.clone())
                                                }
                                            >
                                                "Edit Link"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="card-delete"
                                                on_confirm={
                                                    let id = id.clone();
                                                    Callback::new(move |_| content.delete_social_link(&id))
                                                }
                                            />
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || ui.edit_mode().get()>
                <form class="social-form" on:submit=submit>
                    <h3>
                        {move || if ui.editing_link().get().is_some() { "Edit Link" } else { "Add Link" }}
                    </h3>
                    <input
                        type="text"
                        list="known-platforms"
                        placeholder="Platform"
                        prop:value=move || platform.get()
                        on:input=move |ev| set_platform.set(event_target_value(&ev))
                    />
                    <datalist id="known-platforms">
                        {KNOWN_PLATFORMS.iter().map(|p| view! { <option value=*p /> }).collect_view()}
                    </datalist>
                    <input
                        type="text"
                        placeholder="@username"
                        prop:value=move || handle.get()
                        on:input=move |ev| set_handle.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="e.g. 50K"
                        prop:value=move || followers.get()
                        on:input=move |ev| set_followers.set(event_target_value(&ev))
                    />
                    <div class="form-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
