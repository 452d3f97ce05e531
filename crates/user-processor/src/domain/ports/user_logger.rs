//! Port for the optional per-user activity logger.

/// Receives human readable activity messages.
///
/// Logging never fails from the caller's point of view; adapters swallow or
/// report their own errors.
#[cfg_attr(test, mockall::automock)]
pub trait UserLogger: Send + Sync {
    /// Record a single activity message.
    fn log(&self, message: &str);
}
