//! Shared content records for the Eexplo site.
//!
//! This crate owns the wire representation used by both `eexplo-server` (the
//! content provider) and `eexplo-client` (the Leptos UI). It performs no I/O;
//! records are plain serde types so the browser and the server agree on one
//! JSON shape.

pub mod contact;
pub mod kind;
pub mod model;

pub use contact::{ContactError, ContactField, ContactSubmission};
pub use kind::{ContentKind, ContentQuery, ContentScope, DEFAULT_LATEST_LIMIT, MAX_LATEST_LIMIT, clamp_latest_limit};
pub use model::{BlogPost, Destination, Faq, SearchResults, TourPackage, sort_faqs};
