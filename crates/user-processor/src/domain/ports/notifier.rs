//! Port for outbound user notifications.
use thiserror::Error;

/// Errors raised by notifier adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The recipient address cannot receive mail.
    #[error("invalid notification recipient: {email:?}")]
    InvalidRecipient {
        /// Rejected recipient address.
        email: String,
    },
    /// The message was accepted but could not be delivered.
    #[error("notification delivery failed: {message}")]
    Delivery {
        /// Adapter supplied failure description.
        message: String,
    },
}

impl NotificationError {
    /// Build a [`NotificationError::InvalidRecipient`] for `email`.
    #[must_use]
    pub fn invalid_recipient(email: impl Into<String>) -> Self {
        Self::InvalidRecipient {
            email: email.into(),
        }
    }

    /// Build a [`NotificationError::Delivery`] with `message`.
    #[must_use]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }
}

/// Sends notifications to users.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Send `message` to `email`.
    fn send_email(&self, email: &str, message: &str) -> Result<(), NotificationError>;
}
