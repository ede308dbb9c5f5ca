use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::layout::Layout;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Contact Us"
                subtitle="Tell us where you want to go. A travel advisor replies within one business day."
                compact=true
            />
            <div class="contact-page">
                <ContactForm title="Send Us a Message"/>
                <aside class="contact-page__info">
                    <h3>"Visit our office"</h3>
                    <p>"221 Harbour Street, Suite 4"<br/>"San Francisco, CA"</p>
                    <h3>"Opening hours"</h3>
                    <p>"Mon – Fri, 9:00 – 18:00"</p>
                </aside>
            </div>
        </Layout>
    }
}
