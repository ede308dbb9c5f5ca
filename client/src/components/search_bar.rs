//! Destination search form. Submits `GET /search?q=`.

use leptos::prelude::*;

#[component]
pub fn SearchBar(#[prop(optional, into)] initial: Option<String>) -> impl IntoView {
    view! {
        <form class="search-bar" action="/search" method="get" role="search">
            <input
                class="search-bar__input"
                type="search"
                name="q"
                placeholder="Where do you want to go?"
                value=initial.unwrap_or_default()
                aria-label="Search destinations and packages"
            />
            <button class="btn search-bar__submit" type="submit">"Search"</button>
        </form>
    }
}
