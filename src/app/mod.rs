//! Application-level helpers: input reading and batch counters.

pub mod input;
pub mod statistics;

pub use input::{read_names, InputBatch, NameEntry};
pub use statistics::Counters;
