//! Binding between shared record types and provider content kinds.

use serde::de::DeserializeOwned;

pub use eexplo_content::{
    BlogPost, ContactSubmission, ContentKind, ContentQuery, ContentScope, Destination, Faq, SearchResults, TourPackage,
};

/// A record type a section can bind to.
pub trait ContentRecord: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ContentKind;

    /// Query for this record type in the given scope.
    #[must_use]
    fn query(scope: ContentScope) -> ContentQuery {
        ContentQuery { kind: Self::KIND, scope }
    }
}

impl ContentRecord for Destination {
    const KIND: ContentKind = ContentKind::Destinations;
}

impl ContentRecord for TourPackage {
    const KIND: ContentKind = ContentKind::Packages;
}

impl ContentRecord for BlogPost {
    const KIND: ContentKind = ContentKind::BlogPosts;
}

impl ContentRecord for Faq {
    const KIND: ContentKind = ContentKind::Faqs;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_types_map_to_their_kinds() {
        assert_eq!(Destination::KIND, ContentKind::Destinations);
        assert_eq!(TourPackage::KIND, ContentKind::Packages);
        assert_eq!(BlogPost::KIND, ContentKind::BlogPosts);
        assert_eq!(Faq::KIND, ContentKind::Faqs);
    }

    #[test]
    fn query_uses_record_kind() {
        assert_eq!(Faq::query(ContentScope::Featured).endpoint(), "/api/content/faqs/featured");
    }
}
