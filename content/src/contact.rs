//! Contact form submission record and presence validation.
//!
//! The same check runs in the browser before any request is made and again
//! on the server before the row is stored.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payload of `POST /api/contact`.
///
/// `phone` and `destination` are optional free text; an empty string means
/// "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub destination: String,
    pub message: String,
}

/// Fields the form requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(ContactField),
}

impl ContactSubmission {
    /// Check that name, email, and message are present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, in form order.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Optional field as `Some` only when it carries text.
    #[must_use]
    pub fn phone_opt(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    #[must_use]
    pub fn destination_opt(&self) -> Option<&str> {
        non_blank(&self.destination)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
