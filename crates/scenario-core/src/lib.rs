//! Cooperative Navigation Scenario Library
//!
//! World model, scenario hooks and evaluation driver for the cooperative
//! navigation particle scenario.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod scenario;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::{ScenarioConfig, ZeroDistancePolicy};
pub use error::{ConfigError, EntityList, EvaluationError, ScenarioError};
pub use scenario::{BenchmarkData, CooperativeNavigation, Scenario};

/// Seeded random number generator owned by the caller and lent to `reset_world`
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
