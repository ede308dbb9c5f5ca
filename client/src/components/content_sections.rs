//! Content-bound grid sections: destinations, packages, blog posts.
//!
//! Each section binds to one content kind through `use_section_data`, shows a
//! spinner until the read resolves, and then renders either the fetched rows
//! or its placeholder catalog.

use leptos::prelude::*;

use crate::catalog;
use crate::components::cards::{BlogCard, DestinationCard, PackageCard};
use crate::components::hero::SectionHeading;
use crate::components::spinner::Spinner;
use crate::net::types::{BlogPost, ContentScope, Destination, TourPackage};
use crate::util::binding::{display_list, use_section_data};

#[component]
pub fn DestinationsSection(
    #[prop(default = ContentScope::All)] scope: ContentScope,
    #[prop(into, default = "Popular Destinations".to_owned())] title: String,
    #[prop(into, default = String::new())] subtitle: String,
) -> impl IntoView {
    let data = use_section_data::<Destination>(scope);
    let rows = display_list(data, catalog::destinations());

    view! {
        <section class="section destinations-section" data-source=move || data.with(|d| d.source_attr())>
            <SectionHeading eyebrow="Destinations" title=title subtitle=subtitle/>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <Spinner/> }>
                <div class="card-grid">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|destination| view! { <DestinationCard destination=destination/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn PackagesSection(
    #[prop(default = ContentScope::All)] scope: ContentScope,
    #[prop(into, default = "Tour Packages".to_owned())] title: String,
    #[prop(into, default = String::new())] subtitle: String,
) -> impl IntoView {
    let data = use_section_data::<TourPackage>(scope);
    let rows = display_list(data, catalog::packages());

    view! {
        <section class="section packages-section" data-source=move || data.with(|d| d.source_attr())>
            <SectionHeading eyebrow="Packages" title=title subtitle=subtitle/>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <Spinner/> }>
                <div class="card-grid">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|package| view! { <PackageCard package=package/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn BlogSection(
    #[prop(default = ContentScope::All)] scope: ContentScope,
    #[prop(into, default = "Travel Stories".to_owned())] title: String,
    #[prop(into, default = String::new())] subtitle: String,
) -> impl IntoView {
    let data = use_section_data::<BlogPost>(scope);
    let rows = display_list(data, catalog::blog_posts());

    view! {
        <section class="section blog-section" data-source=move || data.with(|d| d.source_attr())>
            <SectionHeading eyebrow="Blog" title=title subtitle=subtitle/>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <Spinner/> }>
                <div class="card-grid">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|post| view! { <BlogCard post=post/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
