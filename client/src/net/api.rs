//! REST helpers for the content provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since sections
//! only fetch after mounting in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` so callers decide how to degrade: list sections
//! fall back to placeholders, the contact form shows a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BlogPost, ContactSubmission, ContentQuery, ContentRecord, SearchResults};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_post_endpoint(slug: &str) -> String {
    format!("/api/blog-posts/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
const SEARCH_ENDPOINT: &str = "/api/search";

#[cfg(any(test, feature = "hydrate"))]
const CONTACT_ENDPOINT: &str = "/api/contact";

/// Map a non-OK status to an error, treating any 2xx as success.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Fetch the records of `T`'s kind in the scope described by `query`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a body that is
/// not a JSON array of `T`.
pub async fn fetch_list<T: ContentRecord>(query: ContentQuery) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&query.endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<Vec<T>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one published blog post by slug. `Ok(None)` when the provider has
/// no such post.
///
/// # Errors
///
/// Returns an error on transport failure, other non-2xx status, or a bad body.
pub async fn fetch_blog_post(slug: &str) -> Result<Option<BlogPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&blog_post_endpoint(slug))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 404 {
            return Ok(None);
        }
        check_status(resp.status())?;
        resp.json::<BlogPost>().await.map(Some).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(ApiError::Unavailable)
    }
}

/// Search destinations and packages.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn search(query: &str) -> Result<SearchResults, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SEARCH_ENDPOINT)
            .query([("q", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<SearchResults>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Send a contact submission via `POST /api/contact`. Only the status is read.
///
/// # Errors
///
/// Returns an error on transport failure or any non-2xx status.
pub async fn submit_contact(record: &ContactSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(record)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err(ApiError::Unavailable)
    }
}
