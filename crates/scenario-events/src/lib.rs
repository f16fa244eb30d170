//! Shared record types and serialization for the cooperative navigation scenario.
//!
//! This crate contains pure data structures with no scenario logic.
//! It is a dependency for `scenario-core` and for anything that reads its output.

pub mod record;
pub mod snapshot;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export record types
pub use record::{
    generate_record_id, AgentStepRecord, BenchmarkSnapshot, EpisodeSummary, Record,
};

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, EntityKind, EntitySnapshot, WorldSnapshot};
