//! Contact Section Component
//!
//! Collaboration call-to-action, copy-to-clipboard e-mail, and the footer
//! lock that toggles edit mode.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::store::{store_toggle_edit_mode, use_ui_store, UiStateStoreFields};

const CONTACT_EMAIL: &str = "2311339135@qq.com";

/// How long the "copied" marker stays visible
const COPIED_RESET_MS: u32 = 2_000;

/// `navigator.clipboard.writeText`. Needs a secure context.
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        return Err("clipboard API unavailable".to_string());
    }
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ui = use_ui_store();
    let (show_email, set_show_email) = signal(false);
    let (copied, set_copied) = signal(false);

    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    let copy_email = move || {
        set_show_email.set(true);
        spawn_local(async move {
            match copy_to_clipboard(CONTACT_EMAIL).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    set_copied.set(false);
                }
                Err(e) => log::warn!("Copy to clipboard failed: {}", e),
            }
        });
    };

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <section id="contact" class="contact">
            <h2>"Let's Collaborate"</h2>
            <p class="contact-desc">
                "Brand deals, sponsorships, or exhibition matches? Let's create something viral together."
            </p>

            <Show
                when=move || show_email.get()
                fallback=move || view! {
                    <button class="contact-cta" on:click=move |_| copy_email()>"Work With Me"</button>
                }
            >
                <div class="contact-email">
                    <button class="contact-email-btn" on:click=move |_| copy_email()>
                        <span>{CONTACT_EMAIL}</span>
                        <span class="copy-icon">{move || if copied.get() { "✓" } else { "⧉" }}</span>
                    </button>
                    <span class="copy-hint">
                        {move || if copied.get() { "Copied to clipboard" } else { "Click to copy" }}
                    </span>
                </div>
            </Show>

            <footer class="footer">
                <span>{format!("© {} JackLee. All Rights Reserved.", year)}</span>
                <button
                    class="lock-btn"
                    title=move || if ui.edit_mode().get() { "Lock" } else { "Unlock" }
                    on:click=move |_| store_toggle_edit_mode(&ui)
                >
                    {move || if ui.edit_mode().get() { "🔓" } else { "🔒" }}
                </button>
            </footer>

            <Show when=move || ui.edit_mode().get()>
                <details class="recent-log">
                    // The buffer is not reactive; take a fresh snapshot on each open
                    <summary on:click=move |_| set_log_lines.set(console_logger::recent_lines())>
                        "Recent log"
                    </summary>
                    <pre>{move || log_lines.with(|lines| lines.join("\n"))}</pre>
                </details>
            </Show>
        </section>
    }
}
