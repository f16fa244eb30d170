//! Systems
//!
//! Drivers that invoke scenario hooks over a world the way the engine does.

pub mod evaluate;

pub use evaluate::{EpisodeEvaluator, EvaluationOptions, EvaluationReport};
