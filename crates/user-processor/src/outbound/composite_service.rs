//! [`UserService`] assembled from individual capability adapters.

use std::sync::Arc;

use crate::domain::UserRecord;
use crate::domain::ports::{Notifier, UserDetailsSource, UserLogger, UserLookupError, UserService};

/// Bundles a user-detail source with an optional logger and notifier.
///
/// Both optional capabilities start out absent; a processor built over a
/// service without a notifier hits the missing-notifier path.
#[derive(Clone)]
pub struct CompositeUserService {
    source: Arc<dyn UserDetailsSource>,
    logger: Option<Arc<dyn UserLogger>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl CompositeUserService {
    /// Service backed by `source` with no logger and no notifier.
    #[must_use]
    pub const fn new(source: Arc<dyn UserDetailsSource>) -> Self {
        Self {
            source,
            logger: None,
            notifier: None,
        }
    }

    /// Attach a logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn UserLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

impl UserService for CompositeUserService {
    fn fetch_user_details(&self, user_id: &str) -> Result<UserRecord, UserLookupError> {
        self.source.fetch_user_details(user_id)
    }

    fn user_logger(&self) -> Option<Arc<dyn UserLogger>> {
        self.logger.clone()
    }

    fn notifier(&self) -> Option<Arc<dyn Notifier>> {
        self.notifier.clone()
    }
}
