//! Services overview grid.

use leptos::prelude::*;

use crate::catalog::{SERVICES, Service};
use crate::components::hero::SectionHeading;

#[component]
pub fn ServicesGrid(
    #[prop(default = SERVICES)] services: &'static [Service],
    /// Show only the first N services (home page teaser).
    #[prop(optional)]
    limit: Option<usize>,
) -> impl IntoView {
    let shown = limit.map_or(services, |n| &services[..n.min(services.len())]);

    view! {
        <section class="section services">
            <SectionHeading eyebrow="Services" title="Everything for Your Journey"/>
            <div class="card-grid card-grid--three">
                {shown
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="card service-card">
                                {service.icon.map(|glyph| view! { <span class="service-card__icon" aria-hidden="true">{glyph}</span> })}
                                <h3 class="card__title">{service.title}</h3>
                                <p class="card__text">{service.summary}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || limit.is_some()>
                <a class="btn btn--ghost" href="/services">"All services"</a>
            </Show>
        </section>
    }
}
