//! Loading indicator shown while a section's fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner__ring" aria-hidden="true"></span>
            <span class="visually-hidden">{label}</span>
        </div>
    }
}
