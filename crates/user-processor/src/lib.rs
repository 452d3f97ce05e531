//! User processing pipeline built over injected capability ports.
//!
//! A [`UserProcessor`] fetches a user's details, logs the attempt through an
//! optional logger, and notifies the user by email. Every collaborator is a
//! trait in [`domain::ports`], so callers decide which adapters to wire in.
//!
//! The notifier is *not* presence-checked by [`UserProcessor::process`]: when
//! the service hands back no notifier the call panics. This mirrors the fault
//! the crate exists to demonstrate. [`UserProcessor::try_process`] is the
//! hardened variant that reports the missing notifier as an error instead.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use user_processor::UserProcessor;
//! use user_processor::domain::UserRecord;
//! use user_processor::outbound::{CompositeUserService, InMemoryUserDirectory, OutboxNotifier};
//!
//! let record = UserRecord::new("123", "Test User", "test@example.com").expect("valid record");
//! let directory = InMemoryUserDirectory::default().with_user(record);
//! let service = CompositeUserService::new(Arc::new(directory))
//!     .with_notifier(Arc::new(OutboxNotifier::default()));
//!
//! let processor = UserProcessor::new(Arc::new(service));
//! assert_eq!(processor.process("123"), "User data processed successfully");
//! ```

pub mod domain;
pub mod outbound;
pub mod settings;
pub mod telemetry;

pub use domain::{
    MissingNotifierPolicy, ProcessingError, ProcessorOptions, UserProcessor, UserRecord,
};
pub use settings::ProcessorSettings;
