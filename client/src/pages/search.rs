//! Search results page for `/search?q=`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::catalog;
use crate::components::cards::{DestinationCard, PackageCard};
use crate::components::hero::{Hero, SectionHeading};
use crate::components::layout::Layout;
use crate::components::search_bar::SearchBar;
use crate::components::spinner::Spinner;
use crate::state::search::SearchState;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let raw = Memo::new(move |_| query.read().get("q").unwrap_or_default());
    let search = RwSignal::new(SearchState::default());

    Effect::new(move |_| {
        let raw = raw.get();
        let Some(q) = search.try_update(|s| s.begin(&raw)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::search(&q).await;
            #[cfg(feature = "hydrate")]
            if let Err(e) = &result {
                log::warn!("search for {q:?} failed: {e}");
            }
            let _ = search.try_update(|s| s.resolve(&q, result));
        });
    });

    let initial = raw.get_untracked();

    view! {
        <Layout>
            <Hero
                title="Find Your Next Trip"
                compact=true
                actions=Box::new(move || view! { <SearchBar initial=initial/> }.into_any())
            />
            {move || {
                let state = search.get();
                if state.query.is_none() {
                    return view! { <Suggestions/> }.into_any();
                }
                if state.loading {
                    return view! { <Spinner label="Searching..."/> }.into_any();
                }
                if state.failed {
                    return view! {
                        <p class="search-page__notice">"Search is unavailable right now. Try one of our featured destinations."</p>
                        <Suggestions/>
                    }
                        .into_any();
                }
                if state.no_matches() {
                    return view! {
                        <p class="search-page__notice">"No trips match your search."</p>
                        <Suggestions/>
                    }
                        .into_any();
                }
                let heading = format!("Results for \u{201c}{}\u{201d}", state.query.unwrap_or_default());
                view! {
                    <section class="section search-results">
                        <SectionHeading title=heading/>
                        <div class="card-grid">
                            {state
                                .results
                                .destinations
                                .into_iter()
                                .map(|destination| view! { <DestinationCard destination=destination/> })
                                .collect::<Vec<_>>()}
                            {state
                                .results
                                .packages
                                .into_iter()
                                .map(|package| view! { <PackageCard package=package/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                }
                    .into_any()
            }}
        </Layout>
    }
}

/// Featured placeholder destinations shown for a blank or fruitless search.
#[component]
fn Suggestions() -> impl IntoView {
    view! {
        <section class="section search-suggestions">
            <SectionHeading title="Popular right now"/>
            <div class="card-grid">
                {catalog::destinations()
                    .into_iter()
                    .filter(|d| d.featured)
                    .take(3)
                    .map(|destination| view! { <DestinationCard destination=destination/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
