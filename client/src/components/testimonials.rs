//! Testimonial carousel over the static testimonial list.

use leptos::prelude::*;

use crate::catalog::{TESTIMONIALS, Testimonial};
use crate::components::hero::SectionHeading;
use crate::state::carousel::CarouselState;
use crate::util::format;

#[component]
pub fn TestimonialCarousel(#[prop(default = TESTIMONIALS)] items: &'static [Testimonial]) -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(items.len()));
    let current = move || items.get(carousel.with(|c| c.index())).copied();

    view! {
        <section class="section testimonials">
            <SectionHeading eyebrow="Testimonials" title="What Our Travellers Say"/>
            <div class="testimonials__viewport">
                <button
                    class="testimonials__nav testimonials__nav--prev"
                    aria-label="Previous testimonial"
                    on:click=move |_| carousel.update(CarouselState::prev)
                >
                    "‹"
                </button>
                {move || {
                    current()
                        .map(|t| {
                            view! {
                                <figure class="testimonial">
                                    <img class="testimonial__avatar" src=t.avatar_url alt=t.name loading="lazy"/>
                                    <div class="testimonial__rating" aria-label=format!("{} out of 5", t.rating)>
                                        {format::stars(t.rating)}
                                    </div>
                                    <blockquote class="testimonial__quote">{t.quote}</blockquote>
                                    <figcaption class="testimonial__author">
                                        <strong>{t.name}</strong>
                                        <span>{t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                }}
                <button
                    class="testimonials__nav testimonials__nav--next"
                    aria-label="Next testimonial"
                    on:click=move |_| carousel.update(CarouselState::next)
                >
                    "›"
                </button>
            </div>
            <div class="testimonials__dots">
                {(0..items.len())
                    .map(|i| {
                        view! {
                            <button
                                class="testimonials__dot"
                                class:testimonials__dot--active=move || carousel.with(|c| c.index() == i)
                                aria-label=format!("Show testimonial {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.select(i))
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
