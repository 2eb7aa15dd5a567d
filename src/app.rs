//! Rilliex Site App
//!
//! Single page: hero, gallery, schedule, social links and contact.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContactSection, GallerySection, HeroSection, ScheduleSection, SocialSection};
use crate::context::ContentContext;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    // Content is read from storage before the first render
    provide_context(ContentContext::open());
    provide_context(Store::new(UiState::default()));

    view! {
        <div class="site">
            <nav class="navbar">
                <a class="brand" href="#hero">"RILLIEX"</a>
                <a href="#gallery">"Gallery"</a>
                <a href="#schedule">"Schedule"</a>
                <a href="#social">"Social"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <main>
                <HeroSection />
                <GallerySection />
                <ScheduleSection />
                <SocialSection />
                <ContactSection />
            </main>
        </div>
    }
}
