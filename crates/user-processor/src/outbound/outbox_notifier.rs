//! Notifier adapter that records outgoing mail in memory.
//!
//! The outbox stands in for a mail transport. Tests and demos inspect
//! [`OutboxNotifier::sent`] to see what would have been delivered.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::ports::{NotificationError, Notifier};

/// An email accepted by the outbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// In-memory notifier.
///
/// A notifier built with [`OutboxNotifier::failing`] rejects every send with
/// [`NotificationError::Delivery`], which is how callers exercise the
/// notification failure path without a mock.
#[derive(Debug, Default)]
pub struct OutboxNotifier {
    sent: Mutex<Vec<SentEmail>>,
    failure: Option<String>,
}

impl OutboxNotifier {
    /// Notifier whose deliveries always fail with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// Snapshot of the emails accepted so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for OutboxNotifier {
    fn send_email(&self, email: &str, message: &str) -> Result<(), NotificationError> {
        if email.trim().is_empty() {
            return Err(NotificationError::invalid_recipient(email));
        }
        if let Some(failure) = &self.failure {
            return Err(NotificationError::delivery(failure.as_str()));
        }

        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentEmail {
                email: email.to_owned(),
                message: message.to_owned(),
            });
        info!(recipient = email, "notification queued");
        Ok(())
    }
}
