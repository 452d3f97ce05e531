//! User processing orchestration.
//!
//! [`UserProcessor`] runs one user through three steps: fetch the record,
//! log the attempt if a logger is configured, then email the user. The
//! notifier is mandatory. How its absence is surfaced depends on
//! [`MissingNotifierPolicy`]; the default faults by panicking.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::UserRecord;
use super::ports::{NotificationError, UserLookupError, UserService};

/// Body of the email sent once a user has been processed.
pub const NOTIFICATION_MESSAGE: &str = "Your data has been processed";

/// Status returned by [`UserProcessor::process`] on success.
pub const STATUS_PROCESSED: &str = "User data processed successfully";

/// Panic message raised when the notifier is absent under
/// [`MissingNotifierPolicy::Fault`].
pub const MISSING_NOTIFIER_FAULT: &str = "notifier capability is absent";

const LOG_PREFIX: &str = "Processing user: ";

/// Recoverable failures raised by [`UserProcessor::try_process`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// The user-detail source could not produce a record.
    #[error("failed to fetch user details: {0}")]
    UserLookup(#[from] UserLookupError),
    /// The notifier rejected or failed to deliver the email.
    #[error("failed to send notification: {0}")]
    Notification(#[from] NotificationError),
    /// The service returned no notifier.
    #[error("{}", MISSING_NOTIFIER_FAULT)]
    NotifierUnavailable,
}

impl ProcessingError {
    /// User-facing status string for this failure.
    ///
    /// # Examples
    /// ```
    /// use user_processor::ProcessingError;
    /// use user_processor::domain::ports::UserLookupError;
    ///
    /// let err = ProcessingError::from(UserLookupError::not_found("42"));
    /// assert_eq!(err.status_message(), "Error getting user data");
    /// ```
    #[must_use]
    pub const fn status_message(&self) -> &'static str {
        match self {
            Self::UserLookup(_) => "Error getting user data",
            Self::Notification(_) => "Error sending notification",
            Self::NotifierUnavailable => "Notifier unavailable",
        }
    }
}

/// How [`UserProcessor::process`] reacts when the service has no notifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingNotifierPolicy {
    /// Use the notifier without checking for it, panicking when absent.
    #[default]
    Fault,
    /// Return the [`ProcessingError::NotifierUnavailable`] status string.
    Report,
}

/// Tunables applied to every processing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Reaction to a missing notifier.
    pub missing_notifier: MissingNotifierPolicy,
    /// Email body sent to processed users.
    pub notification_message: String,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            missing_notifier: MissingNotifierPolicy::default(),
            notification_message: NOTIFICATION_MESSAGE.to_owned(),
        }
    }
}

/// Stateless processor over an injected [`UserService`].
///
/// The service is shared behind an [`Arc`] so one processor can be cloned
/// into several callers; no call mutates processor state.
pub struct UserProcessor<S: ?Sized> {
    service: Arc<S>,
    options: ProcessorOptions,
}

impl<S: ?Sized> Clone for UserProcessor<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            options: self.options.clone(),
        }
    }
}

impl<S> UserProcessor<S>
where
    S: UserService + ?Sized,
{
    /// Create a processor with default options.
    #[must_use]
    pub fn new(service: Arc<S>) -> Self {
        Self::with_options(service, ProcessorOptions::default())
    }

    /// Create a processor with explicit options.
    #[must_use]
    pub const fn with_options(service: Arc<S>, options: ProcessorOptions) -> Self {
        Self { service, options }
    }

    /// Options in effect for this processor.
    #[must_use]
    pub const fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Process `user_id` and return a human readable status.
    ///
    /// Returns `"User data processed successfully"`, `"Error getting user
    /// data"`, or `"Error sending notification"`. Under
    /// [`MissingNotifierPolicy::Report`] a missing notifier yields
    /// `"Notifier unavailable"`.
    ///
    /// # Panics
    ///
    /// Under [`MissingNotifierPolicy::Fault`] (the default) this panics with
    /// [`MISSING_NOTIFIER_FAULT`] when the service returns no notifier. The
    /// logger, if present, has already been called by then.
    #[must_use]
    pub fn process(&self, user_id: &str) -> String {
        match self.try_process(user_id) {
            Ok(_) => STATUS_PROCESSED.to_owned(),
            Err(ProcessingError::NotifierUnavailable)
                if self.options.missing_notifier == MissingNotifierPolicy::Fault =>
            {
                panic!("{MISSING_NOTIFIER_FAULT}")
            }
            Err(error) => error.status_message().to_owned(),
        }
    }

    /// Process `user_id`, surfacing every failure as a [`ProcessingError`].
    ///
    /// A missing notifier is reported as
    /// [`ProcessingError::NotifierUnavailable`] regardless of policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::UserLookup`] when the fetch fails, in which
    /// case neither the logger nor the notifier is requested.
    /// Returns [`ProcessingError::Notification`] when sending fails.
    pub fn try_process(&self, user_id: &str) -> Result<UserRecord, ProcessingError> {
        debug!(user_id, "fetching user details");
        let record = self
            .service
            .fetch_user_details(user_id)
            .inspect_err(|error| warn!(user_id, %error, "user lookup failed"))?;

        match self.service.user_logger() {
            Some(logger) => logger.log(&format!("{LOG_PREFIX}{}", record.id())),
            None => debug!(user_id, "no user logger configured"),
        }

        let Some(notifier) = self.service.notifier() else {
            warn!(user_id, "no notifier configured");
            return Err(ProcessingError::NotifierUnavailable);
        };

        notifier
            .send_email(record.email(), &self.options.notification_message)
            .inspect_err(|error| warn!(user_id, %error, "notification failed"))?;

        debug!(user_id, "user processed");
        Ok(record)
    }
}
