//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic whole-file rewrites.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::RecordRepository;
