//! Schedule Section Component
//!
//! Weekly schedule grouped by day, with an add/edit form in edit mode.

use content_store::{ScheduleEvent, Weekday};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_content;
use crate::media;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ScheduleSection() -> impl IntoView {
    let content = use_content();
    let ui = use_ui_store();

    let (day, set_day) = signal(Weekday::Mon);
    let (time, set_time) = signal(String::new());
    let (title_en, set_title_en) = signal(String::new());
    let (title_zh, set_title_zh) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let reset_form = move || {
        set_day.set(Weekday::Mon);
        set_time.set(String::new());
        set_title_en.set(String::new());
        set_title_zh.set(String::new());
        set_location.set(String::new());
        ui.editing_event().set(None);
    };

    let start_edit = move |event: ScheduleEvent| {
        set_day.set(event.day);
        set_time.set(event.time);
        set_title_en.set(event.title_en);
        set_title_zh.set(event.title_zh);
        set_location.set(event.location.unwrap_or_default());
        ui.editing_event().set(Some(event.id));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title_en.get_untracked();
        if title.trim().is_empty() {
            return;
        }
        let place = location.get_untracked();
        let editing = ui.editing_event().get_untracked();
        let event = ScheduleEvent {
            id: editing.clone().unwrap_or_else(media::new_id),
            day: day.get_untracked(),
            time: time.get_untracked(),
            title_en: title,
            title_zh: title_zh.get_untracked(),
            location: (!place.trim().is_empty()).then_some(place),
            kind: None,
        };
        match editing {
            Some(_) => content.update_schedule_event(event),
            None => content.add_schedule_event(event),
        }
        reset_form();
    };

    let day_column = move |d: Weekday| {
        view! {
            <div class="schedule-day">
                <h3 class="schedule-day-name">{d.full_name()}</h3>
                {move || {
                    content
                        .with_schedule(|events| {
                            events.iter().filter(|e| e.day == d).cloned().collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|event| {
                            let id = event.id.clone();
                            let for_edit = event.clone();
                            view! {
                                <div class="schedule-card">
                                    <span class="schedule-time">{event.time.clone()}</span>
                                    <span class="schedule-title">{event.title_en.clone()}</span>
                                    {(!event.title_zh.is_empty())
                                        .then(|| view! { <span class="schedule-title-zh">{event.title_zh.clone()}</span> })}
                                    {event.location.clone().map(|l| view! { <span class="schedule-location">{l}</span> })}
                                    <Show when=move || ui.edit_mode().get()>
                                        <div class="card-admin">
                                            <button
                                                class="edit-btn"
                                                on:click={
                                                    let for_edit = for_edit.clone();
                                                    move |_| start_edit(for_edit.clone())
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="card-delete"
                                                on_confirm={
                                                    let id = id.clone();
                                                    Callback::new(move |_| content.delete_schedule_event(&id))
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
        }
    };

    view! {
        <section id="schedule" class="schedule">
            <div class="section-header">
                <div>
                    <h2>"Schedule"</h2>
                    <p class="section-subtitle">"Filming days, editing blocks, and matches."</p>
                </div>
            </div>

            <div class="schedule-grid">
                {Weekday::ALL.into_iter().map(day_column).collect_view()}
            </div>

            <Show when=move || ui.edit_mode().get()>
                <form class="schedule-form" on:submit=submit>
                    <h3>
                        {move || if ui.editing_event().get().is_some() { "Edit Event" } else { "Add Event" }}
                    </h3>
                    <select
                        prop:value=move || day.get().short_name()
                        on:change=move |ev| {
                            if let Some(d) = Weekday::from_short_name(&event_target_value(&ev)) {
                                set_day.set(d);
                            }
                        }
                    >
                        {Weekday::ALL
                            .into_iter()
                            .map(|d| view! { <option value=d.short_name()>{d.full_name()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="10:00 - 12:00"
                        prop:value=move || time.get()
                        on:input=move |ev| set_time.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Title (English)"
                        prop:value=move || title_en.get()
                        on:input=move |ev| set_title_en.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Title (Chinese)"
                        prop:value=move || title_zh.get()
                        on:input=move |ev| set_title_zh.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                    <div class="form-actions">
                        <button type="submit">"Save Changes"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
