use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::content_sections::PackagesSection;
use crate::components::hero::Hero;
use crate::components::layout::Layout;

#[component]
pub fn PackagesPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Tour Packages"
                subtitle="All-inclusive itineraries with flights, stays and guides."
                image_url="/images/hero/packages.jpg"
                compact=true
            />
            <PackagesSection title="All Packages"/>
            <ContactForm title="Ask About a Package"/>
        </Layout>
    }
}
