//! Hero banners and section headings.
//!
//! DESIGN
//! ======
//! Decorative parts (background image, icon, call-to-action row) are explicit
//! optional slots. A slot that is not supplied renders nothing at all rather
//! than an empty wrapper.

use leptos::prelude::*;

/// Full-width banner at the top of a page.
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Background image URL.
    #[prop(optional, into)]
    image_url: Option<String>,
    /// Small glyph above the title.
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Buttons, search bar, or other calls to action under the subtitle.
    #[prop(optional)]
    actions: Option<Children>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let style = image_url
        .map(|url| format!("background-image: linear-gradient(rgba(0,0,0,.45), rgba(0,0,0,.45)), url('{url}')"));

    view! {
        <section class="hero" class:hero--compact=compact style=style>
            <div class="hero__inner">
                {icon.map(|glyph| view! { <span class="hero__icon" aria-hidden="true">{glyph}</span> })}
                <h1 class="hero__title">{title}</h1>
                {subtitle.map(|text| view! { <p class="hero__subtitle">{text}</p> })}
                {actions.map(|slot| view! { <div class="hero__actions">{slot()}</div> })}
            </div>
        </section>
    }
}

/// Title block above a page section.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] eyebrow: Option<String>,
    /// Omitted from markup when empty.
    #[prop(into, default = String::new())]
    subtitle: String,
) -> impl IntoView {
    let subtitle = (!subtitle.is_empty()).then_some(subtitle);

    view! {
        <header class="section-heading">
            {eyebrow.map(|text| view! { <span class="section-heading__eyebrow">{text}</span> })}
            <h2 class="section-heading__title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-heading__subtitle">{text}</p> })}
        </header>
    }
}
