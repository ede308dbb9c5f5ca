//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool, the optional contact notifier, and the
//! per-address limiter guarding `POST /api/contact`.

use std::sync::Arc;

use sqlx::PgPool;

use crate::rate_limit::RateLimiter;
use crate::services::notify::ContactNotifier;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// `None` if the Resend env vars are not configured.
    pub notifier: Option<Arc<dyn ContactNotifier>>,
    pub contact_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, notifier: Option<Arc<dyn ContactNotifier>>, contact_limiter: RateLimiter) -> Self {
        Self { pool, notifier, contact_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
