//! Shared page chrome: header navigation and footer.

use leptos::prelude::*;

use crate::util::scroll;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/destinations", "Destinations"),
    ("/packages", "Packages"),
    ("/services", "Services"),
    ("/rentals", "Rentals"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Header + page body + footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main class="site__main">{children()}</main>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Eexplo"</a>
            <button
                class="site-header__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="site-nav" class:site-nav--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="site-nav__link" href=*href on:click=move |_| menu_open.set(false)>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <a class="btn btn--small site-header__cta" href="/search">"Find a trip"</a>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <span class="site-footer__brand">"Eexplo"</span>
                    <p>"Hand-crafted journeys to the world's most beautiful places."</p>
                </div>
                <div class="site-footer__column">
                    <h4>"Explore"</h4>
                    <a href="/destinations">"Destinations"</a>
                    <a href="/packages">"Packages"</a>
                    <a href="/hotels/caldera-suites">"Featured hotel"</a>
                    <a href="/rentals">"Greendoors rentals"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Company"</h4>
                    <a href="/services">"Services"</a>
                    <a href="/blog">"Blog"</a>
                    <a href="/contact">"Contact"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Get in touch"</h4>
                    <p>"hello@eexplo.travel"</p>
                    <p>"+1 (555) 010-2030"</p>
                </div>
            </div>
            <div class="site-footer__bottom">
                <span>"© Eexplo Travel. All rights reserved."</span>
                <button class="site-footer__top" on:click=move |_| scroll::to_top()>"Back to top ↑"</button>
            </div>
        </footer>
    }
}
