//! Newsletter signup.

use home_core::format::timestamp_now;
use home_events::{EventData, EventLog, StorageError};

/// Shown after a successful signup.
pub const CONFIRMATION_MESSAGE: &str = "Thank you for subscribing! You'll receive our weekly newsletter with the latest Virginia real estate insights and home essentials.";

/// Accepts signups. Nothing is delivered; the signup is only recorded.
#[derive(Clone)]
pub struct NewsletterSignup {
    events: EventLog,
}

impl NewsletterSignup {
    pub fn new(events: EventLog) -> Self {
        Self { events }
    }

    /// Handle a URL-encoded form body. A body without a non-blank `email`
    /// field is ignored and yields `None`.
    pub fn submit_form(&self, body: &[u8]) -> Result<Option<&'static str>, StorageError> {
        let email = url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.trim().to_string());

        match email {
            Some(email) if !email.is_empty() => self.subscribe(&email).map(Some),
            _ => Ok(None),
        }
    }

    /// Record a signup for `email` and return the confirmation text.
    pub fn subscribe(&self, email: &str) -> Result<&'static str, StorageError> {
        self.events.record(
            "newsletter_signup",
            EventData::new()
                .with("email", email)
                .with("timestamp", timestamp_now()),
        )?;
        Ok(CONFIRMATION_MESSAGE)
    }
}
