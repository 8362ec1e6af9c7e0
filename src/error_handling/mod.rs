//! Error handling: failure classification and initialization errors.

mod categorization;
mod types;

pub use categorization::classify_request_error;
pub use types::{FailureKind, InitializationError};
