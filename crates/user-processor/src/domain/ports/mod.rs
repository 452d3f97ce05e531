//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe the capabilities the processor consumes but never
//! implements: a user-detail source, an optional logger, and a notifier.
//! Each fallible port exposes a strongly typed error so adapters map their
//! failures into predictable variants.
//!
//! All ports are synchronous. Processing performs no suspension and the
//! adapters in this crate do not perform I/O.

mod notifier;
mod user_details_source;
mod user_logger;
mod user_service;

#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{NotificationError, Notifier};
#[cfg(test)]
pub use user_details_source::MockUserDetailsSource;
pub use user_details_source::{UserDetailsSource, UserLookupError};
#[cfg(test)]
pub use user_logger::MockUserLogger;
pub use user_logger::UserLogger;
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
