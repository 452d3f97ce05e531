//! User logger that forwards messages to `tracing`.

use tracing::info;

use crate::domain::ports::UserLogger;

/// Emits each message as an `info` event on the `user_activity` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingUserLogger;

impl UserLogger for TracingUserLogger {
    fn log(&self, message: &str) {
        info!(target: "user_activity", entry = message, "user activity");
    }
}
