//! Contact form field state and submit orchestration.
//!
//! DESIGN
//! ======
//! The submit flow is split into pure steps so the component only wires
//! signals: `begin_submit` validates and snapshots the record (or reports a
//! user-facing validation message), the component performs the single
//! network call, and `finish_submit` applies the outcome.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use eexplo_content::{ContactError, ContactSubmission};

pub const VALIDATION_MESSAGE: &str = "Please fill in your name, email and message.";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. We'll be in touch soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong sending your message. Please try again.";

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Destination,
    Message,
}

/// Form values plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactSubmission,
    pub submitting: bool,
}

/// Why a submit did not start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already in flight.
    InFlight,
    /// Required field missing.
    Invalid(ContactError),
}

impl ContactFormState {
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Phone => &self.fields.phone,
            FormField::Destination => &self.fields.destination,
            FormField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Phone => &mut self.fields.phone,
            FormField::Destination => &mut self.fields.destination,
            FormField::Message => &mut self.fields.message,
        };
        *slot = value;
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns the record to send. Nothing changes when blocked.
    ///
    /// # Errors
    ///
    /// `SubmitBlocked::Invalid` when name, email, or message is empty;
    /// `SubmitBlocked::InFlight` while a previous submit is pending.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.fields.validate().map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;
        Ok(self.fields.clone())
    }

    /// Apply the submission result. Clears the fields only on success.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.fields = ContactSubmission::default();
        }
        self.submitting = false;
    }
}
