//! Driven adapters implementing the domain ports.
//!
//! Adapters here are in-process: a map-backed directory, a `tracing`
//! logger, and an outbox notifier that records mail instead of sending it.
//! [`CompositeUserService`] assembles them into the aggregate
//! [`crate::domain::ports::UserService`] port.

mod composite_service;
mod in_memory_directory;
mod outbox_notifier;
mod tracing_logger;

pub use composite_service::CompositeUserService;
pub use in_memory_directory::InMemoryUserDirectory;
pub use outbox_notifier::{OutboxNotifier, SentEmail};
pub use tracing_logger::TracingUserLogger;
