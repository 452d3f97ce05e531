//! Domain primitives, ports, and the user processing service.
//!
//! Public surface:
//! - UserRecord (alias to `user_record::UserRecord`) — validated user details.
//! - UserProcessor (alias to `user_processor::UserProcessor`) — fetch, log,
//!   and notify orchestration.
//! - ProcessingError — recoverable failures raised by the processor.

pub mod ports;
pub mod user_processor;
pub mod user_record;

pub use self::user_processor::{
    MISSING_NOTIFIER_FAULT, MissingNotifierPolicy, NOTIFICATION_MESSAGE, ProcessingError,
    ProcessorOptions, STATUS_PROCESSED, UserProcessor,
};
pub use self::user_record::{UserRecord, UserRecordValidationError};
