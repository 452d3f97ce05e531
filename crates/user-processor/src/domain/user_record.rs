//! User data model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by [`UserRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRecordValidationError {
    /// Identifier is empty once trimmed of whitespace.
    #[error("user id must not be empty")]
    EmptyId,
    /// Email address is empty once trimmed of whitespace.
    #[error("user email must not be empty")]
    EmptyEmail,
}

/// User details returned by a lookup port.
///
/// ## Invariants
/// - `id` must be non-empty once trimmed of whitespace.
/// - `email` must be non-empty once trimmed of whitespace.
///
/// Records are immutable; adapters build a fresh value for every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecordDto", into = "UserRecordDto")]
pub struct UserRecord {
    id: String,
    name: String,
    email: String,
}

impl UserRecord {
    /// Validate and construct a [`UserRecord`].
    ///
    /// # Examples
    /// ```
    /// use user_processor::domain::{UserRecord, UserRecordValidationError};
    ///
    /// let record = UserRecord::new("123", "Test User", "test@example.com").expect("valid");
    /// assert_eq!(record.email(), "test@example.com");
    ///
    /// let err = UserRecord::new(" ", "Nobody", "nobody@example.com").unwrap_err();
    /// assert_eq!(err, UserRecordValidationError::EmptyId);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserRecordValidationError> {
        let record = Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        };
        if record.id.trim().is_empty() {
            return Err(UserRecordValidationError::EmptyId);
        }
        if record.email.trim().is_empty() {
            return Err(UserRecordValidationError::EmptyEmail);
        }
        Ok(record)
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Human readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Address notifications are sent to.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserRecordDto {
    id: String,
    name: String,
    email: String,
}

impl From<UserRecord> for UserRecordDto {
    fn from(value: UserRecord) -> Self {
        let UserRecord { id, name, email } = value;
        Self { id, name, email }
    }
}

impl TryFrom<UserRecordDto> for UserRecord {
    type Error = UserRecordValidationError;

    fn try_from(value: UserRecordDto) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name, value.email)
    }
}
