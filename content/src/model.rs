//! Display records served by the content provider.
//!
//! The UI never mutates these; they arrive as JSON from `/api/content/*` or
//! come from the client's placeholder catalog.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A travel destination card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Number of tours offered at this destination.
    pub tour_count: i32,
    pub image_url: String,
    pub description: String,
    pub featured: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A bookable tour package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: String,
    /// Lookup-only reference to a [`Destination`]; may dangle.
    pub destination_id: Option<String>,
    pub name: String,
    /// Free text such as `"7 Days / 6 Nights"`.
    pub duration: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub featured: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A blog article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    /// Estimated reading time in minutes.
    pub read_time: i32,
    pub category: String,
    pub published: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A frequently asked question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Display sort key, ascending.
    pub order: i32,
    pub active: bool,
}

/// Response body of `GET /api/search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub packages: Vec<TourPackage>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty() && self.packages.is_empty()
    }
}

/// Sort FAQs by their display key, keeping provider order for ties.
pub fn sort_faqs(faqs: &mut [Faq]) {
    faqs.sort_by_key(|faq| faq.order);
}
