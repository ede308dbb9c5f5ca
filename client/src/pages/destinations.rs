use leptos::prelude::*;

use crate::components::content_sections::DestinationsSection;
use crate::components::hero::Hero;
use crate::components::layout::Layout;
use crate::components::logo_marquee::LogoMarquee;

#[component]
pub fn DestinationsPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Destinations"
                subtitle="From island hideaways to mountain citadels."
                image_url="/images/hero/destinations.jpg"
                compact=true
            />
            <DestinationsSection title="All Destinations"/>
            <LogoMarquee/>
        </Layout>
    }
}
