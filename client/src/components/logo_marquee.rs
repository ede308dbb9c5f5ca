//! Infinitely scrolling partner logo strip.
//!
//! The track holds the partner list twice; `.marquee__track` animates from
//! 0% to -50% so the loop point is invisible. Hover pauses it in CSS.

use leptos::prelude::*;

use crate::catalog::{PARTNERS, Partner};
use crate::state::marquee::{DEFAULT_MARQUEE_SECS, doubled, track_style};

#[component]
pub fn LogoMarquee(
    #[prop(default = PARTNERS)] partners: &'static [Partner],
    #[prop(default = DEFAULT_MARQUEE_SECS)] duration_secs: u32,
) -> impl IntoView {
    let len = partners.len();

    view! {
        <section class="marquee" aria-label="Our partners">
            <div class="marquee__track" style=track_style(duration_secs)>
                {doubled(partners)
                    .into_iter()
                    .enumerate()
                    .map(|(i, partner)| {
                        // The second copy is for the visual loop only.
                        let hidden = i >= len;
                        view! {
                            <div class="marquee__item" aria-hidden=hidden.then_some("true")>
                                <img src=partner.logo_url alt=partner.name loading="lazy"/>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
