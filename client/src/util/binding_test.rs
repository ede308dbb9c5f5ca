use super::*;
use crate::catalog;
use crate::net::types::{Destination, Faq};

#[test]
fn section_starts_loading_outside_the_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let data = use_section_data::<Destination>(ContentScope::Featured);
        data.with_untracked(|state| {
            assert!(state.loading);
            assert!(state.items.is_empty());
            assert_eq!(state.source_attr(), "loading");
        });
    });
}

#[test]
fn loading_section_displays_placeholders() {
    let owner = Owner::new();
    owner.with(|| {
        let data = use_section_data::<Faq>(ContentScope::All);
        let rows = display_list(data, catalog::faqs());
        assert_eq!(rows.get_untracked(), catalog::faqs());
    });
}
