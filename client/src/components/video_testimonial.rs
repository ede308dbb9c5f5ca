//! Decorative video testimonial with a play/pause toggle.
//!
//! No media element is driven; the toggle only swaps the icon and overlay.

use leptos::prelude::*;

use crate::state::playback::PlayToggle;

#[component]
pub fn VideoTestimonial(
    #[prop(into, default = "/images/video-poster.jpg".to_owned())] poster_url: String,
    #[prop(into, default = "Watch how our travellers explore the world".to_owned())] caption: String,
) -> impl IntoView {
    let playback = RwSignal::new(PlayToggle::default());

    view! {
        <section class="section video-testimonial">
            <div class="video-testimonial__frame" class:video-testimonial__frame--playing=move || playback.get().is_playing>
                <img class="video-testimonial__poster" src=poster_url alt="" aria-hidden="true"/>
                <button
                    class="video-testimonial__toggle"
                    aria-label=move || playback.get().label()
                    aria-pressed=move || if playback.get().is_playing { "true" } else { "false" }
                    on:click=move |_| playback.update(PlayToggle::toggle)
                >
                    {move || playback.get().icon()}
                </button>
            </div>
            <p class="video-testimonial__caption">{caption}</p>
        </section>
    }
}
