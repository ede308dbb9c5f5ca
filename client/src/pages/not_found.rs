use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::layout::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Page not found"
                subtitle="The page you are looking for has wandered off."
                compact=true
                actions=Box::new(|| view! { <a class="btn" href="/">"Back home"</a> }.into_any())
            />
        </Layout>
    }
}
