//! Storage layer for expense-export
//!
//! Reading the input transaction dump from disk.

pub mod file_io;

pub use file_io::{parse_records, read_records};
