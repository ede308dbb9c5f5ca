//! Greendoors apartment rentals landing page.

use leptos::prelude::*;

use crate::catalog::APARTMENTS;
use crate::components::cards::ApartmentCard;
use crate::components::contact_form::ContactForm;
use crate::components::faq_section::FaqSection;
use crate::components::hero::{Hero, SectionHeading};
use crate::components::layout::Layout;
use crate::components::testimonials::TestimonialCarousel;

#[component]
pub fn RentalsPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Greendoors Apartments"
                subtitle="Furnished homes for stays of a month or more."
                image_url="/images/hero/rentals.jpg"
                icon="🚪"
                actions=Box::new(|| view! { <a class="btn" href="#contact">"Book a viewing"</a> }.into_any())
            />
            <section class="section apartments">
                <SectionHeading eyebrow="Available now" title="Apartments for Rent"/>
                <div class="card-grid card-grid--three">
                    {APARTMENTS.iter().map(|apartment| view! { <ApartmentCard apartment=apartment/> }).collect::<Vec<_>>()}
                </div>
            </section>
            <TestimonialCarousel/>
            <FaqSection title="Renting With Greendoors"/>
            <ContactForm title="Book a Viewing"/>
        </Layout>
    }
}
