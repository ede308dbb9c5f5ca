//! Fetch-on-mount binding between a section and the content provider.
//!
//! DESIGN
//! ======
//! This is the single implementation of the section loading dance: create a
//! loading `SectionData<T>`, issue one provider read when the section mounts
//! in the browser, and resolve the state with whatever comes back. SSR
//! renders the loading state so hydration markup matches the first client
//! render.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation. A response that arrives after the section
//! unmounted is dropped because the disposed signal rejects `try_update`.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "binding_test.rs"]
mod binding_test;

use leptos::prelude::*;

use crate::net::types::{ContentRecord, ContentScope};
use crate::state::section::SectionData;

/// Bind a section to `T`'s content kind in `scope`.
pub fn use_section_data<T: ContentRecord>(scope: ContentScope) -> RwSignal<SectionData<T>> {
    let data = RwSignal::new(SectionData::<T>::new());

    #[cfg(feature = "hydrate")]
    {
        let query = T::query(scope);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_list::<T>(query).await;
            if let Err(e) = &result {
                log::warn!("{} fetch failed, showing placeholders: {e}", query.endpoint());
            }
            let _ = data.try_update(|state| state.resolve(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scope;
    }

    data
}

/// Rows to render for a bound section, recomputed when the fetch resolves.
pub fn display_list<T>(data: RwSignal<SectionData<T>>, placeholders: Vec<T>) -> Memo<Vec<T>>
where
    T: ContentRecord + PartialEq,
{
    Memo::new(move |_| data.with(|state| state.display(&placeholders)))
}
