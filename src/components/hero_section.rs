//! Hero Section Component
//!
//! Full-width cover image with the profile picture. In edit mode both images
//! can be replaced from a local file.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_content;
use crate::media;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn HeroSection() -> impl IntoView {
    let content = use_content();
    let ui = use_ui_store();

    let on_hero_file = move |ev: web_sys::Event| {
        let Some(file) = media::first_file(&ev) else { return };
        spawn_local(async move {
            match media::read_as_data_url(&file).await {
                Ok(url) => content.set_hero_image(url),
                Err(e) => media::report_read_failure(&e),
            }
        });
    };

    let on_profile_file = move |ev: web_sys::Event| {
        let Some(file) = media::first_file(&ev) else { return };
        spawn_local(async move {
            match media::read_as_data_url(&file).await {
                Ok(url) => content.set_profile_image(url),
                Err(e) => media::report_read_failure(&e),
            }
        });
    };

    view! {
        <section
            id="hero"
            class="hero"
            style=move || content.with_hero_image(|url| format!("background-image: url('{}')", url))
        >
            <div class="hero-overlay">
                <img class="hero-profile" src=move || content.with_profile_image(str::to_string) alt="Rilliex" />
                <h1 class="hero-title">"Rilliex"</h1>
                <p class="hero-subtitle">"Creator & Athlete"</p>
                <p class="hero-desc">
                    "Redefining tennis entertainment. Trick shots, vlogs, and high-performance tennis on the red clay."
                </p>
                <a class="hero-cta" href="#gallery">"Watch Highlights"</a>

                <Show when=move || ui.edit_mode().get()>
                    <div class="hero-admin">
                        <label class="file-btn">
                            "Change Background"
                            <input type="file" accept="image/*" class="hidden" on:change=on_hero_file />
                        </label>
                        <label class="file-btn">
                            "Change Profile Photo"
                            <input type="file" accept="image/*" class="hidden" on:change=on_profile_file />
                        </label>
                    </div>
                </Show>
            </div>
        </section>
    }
}
