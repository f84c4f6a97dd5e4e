//! dataset module

pub mod json_io;

/// Re-exports
pub use json_io::{load_records, write_json_pretty};
