//! Aggregate port handed to the processor.
//!
//! The service bundles the lookup capability with accessors for the logger
//! and notifier. Either accessor may return `None`; callers decide whether
//! absence is tolerated.

use std::sync::Arc;

use super::{Notifier, UserLogger, UserLookupError};
use crate::domain::UserRecord;

/// Capability bundle consumed by [`crate::UserProcessor`].
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// Fetch the record for `user_id`.
    fn fetch_user_details(&self, user_id: &str) -> Result<UserRecord, UserLookupError>;

    /// Logger for per-user activity, when one is configured.
    fn user_logger(&self) -> Option<Arc<dyn UserLogger>>;

    /// Notifier for outbound email, when one is configured.
    fn notifier(&self) -> Option<Arc<dyn Notifier>>;
}
