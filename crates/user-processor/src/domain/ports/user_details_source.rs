//! Port abstraction for user lookup adapters and their errors.
use thiserror::Error;

use crate::domain::UserRecord;

/// Errors raised by user-detail sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserLookupError {
    /// No user exists with the requested identifier.
    #[error("user {id} was not found")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },
    /// The backing directory could not answer the lookup.
    #[error("user directory unavailable: {message}")]
    Unavailable {
        /// Adapter supplied failure description.
        message: String,
    },
}

impl UserLookupError {
    /// Build a [`UserLookupError::NotFound`] for `id`.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Build a [`UserLookupError::Unavailable`] with `message`.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Source of user details keyed by identifier.
#[cfg_attr(test, mockall::automock)]
pub trait UserDetailsSource: Send + Sync {
    /// Fetch the record for `user_id`.
    ///
    /// Identifiers are passed through untouched; adapters decide what an
    /// unknown or malformed identifier means.
    fn fetch_user_details(&self, user_id: &str) -> Result<UserRecord, UserLookupError>;
}
