//! Contact submission intake.
//!
//! Validates the shared presence rules, checks the email shape, then stores
//! the submission. Notification delivery happens afterwards in the route and
//! never fails a stored submission.

use eexplo_content::{ContactError, ContactSubmission};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error("invalid email")]
    InvalidEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A submission as persisted, with optional fields resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub destination: Option<String>,
    pub message: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Validate and trim a submission without touching storage.
///
/// # Errors
///
/// Returns [`ContactServiceError::Invalid`] for a missing required field and
/// [`ContactServiceError::InvalidEmail`] for a malformed address.
pub fn prepare(submission: &ContactSubmission) -> Result<StoredContact, ContactServiceError> {
    submission.validate()?;
    let email = normalize_email(&submission.email).ok_or(ContactServiceError::InvalidEmail)?;

    Ok(StoredContact {
        id: String::new(),
        name: submission.name.trim().to_owned(),
        email,
        phone: submission.phone_opt().map(str::to_owned),
        destination: submission.destination_opt().map(str::to_owned),
        message: submission.message.trim().to_owned(),
    })
}

/// Validate and insert a submission.
///
/// # Errors
///
/// Returns a validation error before any query runs, or
/// [`ContactServiceError::Database`] if the insert fails.
pub async fn submit(pool: &PgPool, submission: &ContactSubmission) -> Result<StoredContact, ContactServiceError> {
    let mut contact = prepare(submission)?;

    let id: String = sqlx::query_scalar(
        r"INSERT INTO contact_submissions (name, email, phone, destination, message)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id::text",
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(contact.phone.as_deref())
    .bind(contact.destination.as_deref())
    .bind(&contact.message)
    .fetch_one(pool)
    .await?;

    contact.id = id;
    Ok(contact)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
