//! Landing page.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::content_sections::{BlogSection, DestinationsSection, PackagesSection};
use crate::components::faq_section::FaqSection;
use crate::components::hero::Hero;
use crate::components::layout::Layout;
use crate::components::logo_marquee::LogoMarquee;
use crate::components::search_bar::SearchBar;
use crate::components::services_grid::ServicesGrid;
use crate::components::testimonials::TestimonialCarousel;
use crate::components::video_testimonial::VideoTestimonial;
use crate::net::types::ContentScope;

const LATEST_POSTS: u32 = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Discover the World with Eexplo"
                subtitle="Curated tours, handpicked stays and local guides in over 60 countries."
                image_url="/images/hero/home.jpg"
                actions=Box::new(|| view! { <SearchBar/> }.into_any())
            />
            <DestinationsSection scope=ContentScope::Featured title="Featured Destinations"/>
            <PackagesSection scope=ContentScope::Featured title="Popular Packages"/>
            <ServicesGrid limit=3/>
            <TestimonialCarousel/>
            <VideoTestimonial/>
            <LogoMarquee/>
            <BlogSection scope=ContentScope::Latest(LATEST_POSTS) title="Latest from the Blog"/>
            <FaqSection/>
            <ContactForm/>
        </Layout>
    }
}
