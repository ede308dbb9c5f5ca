//! Services overview with partner hotels.

use leptos::prelude::*;

use crate::catalog::HOTELS;
use crate::components::cards::HotelCard;
use crate::components::contact_form::ContactForm;
use crate::components::faq_section::FaqSection;
use crate::components::hero::{Hero, SectionHeading};
use crate::components::layout::Layout;
use crate::components::services_grid::ServicesGrid;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero title="Our Services" subtitle="One team for every part of your trip." icon="🧳" compact=true/>
            <ServicesGrid/>
            <section class="section hotels">
                <SectionHeading eyebrow="Stays" title="Partner Hotels"/>
                <div class="card-grid card-grid--three">
                    {HOTELS.iter().map(|hotel| view! { <HotelCard hotel=hotel/> }).collect::<Vec<_>>()}
                </div>
            </section>
            <FaqSection/>
            <ContactForm/>
        </Layout>
    }
}
