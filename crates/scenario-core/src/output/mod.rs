//! Output
//!
//! JSONL record logging for evaluation runs.

pub mod logger;

pub use logger::RecordLogger;
