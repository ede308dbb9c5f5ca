//! Contact form intake route.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::Json;
use eexplo_content::ContactSubmission;
use serde::Serialize;

use crate::services::contact::{self, ContactServiceError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub id: String,
}

pub(crate) fn contact_error_to_status(err: &ContactServiceError) -> StatusCode {
    match err {
        ContactServiceError::Invalid(_) | ContactServiceError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        ContactServiceError::Database(_) | ContactServiceError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/contact`: rate-limit and validate, store, then notify.
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(body): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactCreated>), StatusCode> {
    if let Err(e) = state.contact_limiter.check_and_record(addr.ip()) {
        tracing::warn!(client = %addr.ip(), error = %e, "contact submission rate limited");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    let stored = contact::submit(&state.pool, &body).await.map_err(|e| {
        let status = contact_error_to_status(&e);
        if status.is_server_error() {
            tracing::error!(error = %e, "contact submission failed");
        } else {
            tracing::info!(error = %e, "contact submission rejected");
        }
        status
    })?;
    tracing::info!(id = %stored.id, "contact submission stored");

    if let Some(notifier) = &state.notifier {
        if let Err(e) = notifier.notify(&stored).await {
            tracing::warn!(id = %stored.id, error = %e, "contact notification failed");
        }
    }

    Ok((StatusCode::CREATED, Json(ContactCreated { id: stored.id })))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
