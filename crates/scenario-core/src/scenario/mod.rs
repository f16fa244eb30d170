//! Scenario Hooks
//!
//! A scenario parameterizes the simulation engine: it builds the world, resets it
//! between episodes, and scores and observes it on every step.

pub mod cooperative_navigation;

pub use cooperative_navigation::CooperativeNavigation;

use rand::RngCore;
use scenario_events::BenchmarkSnapshot;
use serde::{Deserialize, Serialize};

use crate::components::{is_collision, Agent, Entity, World};
use crate::error::ScenarioError;

/// Hooks the engine invokes at world-creation, episode-reset and per-step time.
pub trait Scenario {
    /// Short identifier used in logs and output
    fn name(&self) -> &'static str;

    /// Build a new world, already reset for its first episode
    fn make_world(&self, rng: &mut dyn RngCore) -> World;

    /// Re-randomize per-episode state in place
    fn reset_world(&self, world: &mut World, rng: &mut dyn RngCore);

    /// Scalar reward for `agent`
    fn reward(&self, agent: &Agent, world: &World) -> Result<f64, ScenarioError>;

    /// Flat observation vector for `agent`
    fn observation(&self, agent: &Agent, world: &World) -> Result<Vec<f64>, ScenarioError>;

    /// Diagnostics for `agent`
    fn benchmark_data(&self, agent: &Agent, world: &World) -> Result<BenchmarkData, ScenarioError>;

    /// Overlap test; assumes both positions share one dimension
    fn is_collision(&self, a: &dyn Entity, b: &dyn Entity) -> bool {
        is_collision(a, b)
    }
}

/// Output of [`Scenario::benchmark_data`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Negative sum of landmark coverage distances minus collision penalties
    pub reward: f64,
    pub collisions: u32,
    /// Sum over landmarks of the distance to the nearest agent
    pub min_dists: f64,
    pub occupied_landmarks: u32,
}

impl BenchmarkData {
    /// `(rew, collisions, min_dists, occupied_landmarks)`
    pub fn as_tuple(&self) -> (f64, u32, f64, u32) {
        (self.reward, self.collisions, self.min_dists, self.occupied_landmarks)
    }
}

impl From<BenchmarkData> for BenchmarkSnapshot {
    fn from(data: BenchmarkData) -> Self {
        BenchmarkSnapshot {
            reward: data.reward,
            collisions: data.collisions,
            min_dists: data.min_dists,
            occupied_landmarks: data.occupied_landmarks,
        }
    }
}
