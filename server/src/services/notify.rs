//! Contact notification email.
//!
//! DESIGN
//! ======
//! `ContactNotifier` is the seam between the contact route and the mail
//! provider so handlers can be tested with an in-memory notifier. The Resend
//! implementation renders `templates/contact_notification.html` with
//! HTML-escaped submission fields.

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::EmailConfig;
use crate::services::contact::{ContactServiceError, StoredContact};

const CONTACT_NOTIFICATION_TEMPLATE: &str = include_str!("../../templates/contact_notification.html");
const NOT_PROVIDED: &str = "Not provided";

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Deliver a notification for a stored submission.
    async fn notify(&self, contact: &StoredContact) -> Result<(), ContactServiceError>;
}

/// Sends notifications to the site inbox through Resend.
pub struct ResendNotifier {
    resend: Resend,
    from: String,
    inbox: String,
}

impl ResendNotifier {
    #[must_use]
    pub fn new(config: &EmailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone(), inbox: config.inbox.clone() }
    }
}

#[async_trait]
impl ContactNotifier for ResendNotifier {
    async fn notify(&self, contact: &StoredContact) -> Result<(), ContactServiceError> {
        let subject = notification_subject(contact);
        let html = render_notification(contact);
        let email = CreateEmailBaseOptions::new(&self.from, [&self.inbox], subject).with_html(&html);

        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactServiceError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn notification_subject(contact: &StoredContact) -> String {
    match &contact.destination {
        Some(destination) => format!("New enquiry from {} about {destination}", contact.name),
        None => format!("New enquiry from {}", contact.name),
    }
}

#[must_use]
pub fn render_notification(contact: &StoredContact) -> String {
    CONTACT_NOTIFICATION_TEMPLATE
        .replace("{{name}}", &escape_html(&contact.name))
        .replace("{{email}}", &escape_html(&contact.email))
        .replace("{{phone}}", &escape_html(contact.phone.as_deref().unwrap_or(NOT_PROVIDED)))
        .replace("{{destination}}", &escape_html(contact.destination.as_deref().unwrap_or(NOT_PROVIDED)))
        .replace("{{message}}", &escape_html(&contact.message).replace('\n', "<br>"))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
