//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    blog::{BlogPage, BlogPostPage},
    contact::ContactPage,
    destinations::DestinationsPage,
    home::HomePage,
    hotel::HotelPage,
    not_found::NotFoundPage,
    packages::PackagesPage,
    rentals::RentalsPage,
    search::SearchPage,
    services::ServicesPage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue context and sets up client-side routing. Content
/// state is deliberately not provided here; each section owns its own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/eexplo.css"/>
        <Title text="Eexplo | Travel & Stays"/>
        <Meta name="description" content="Curated tours, destinations and stays around the world."/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("destinations") view=DestinationsPage/>
                <Route path=StaticSegment("packages") view=PackagesPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=(StaticSegment("hotels"), ParamSegment("id")) view=HotelPage/>
                <Route path=StaticSegment("search") view=SearchPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("rentals") view=RentalsPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
