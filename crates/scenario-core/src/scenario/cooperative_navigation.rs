//! Cooperative Navigation
//!
//! Agents spread out to cover landmarks. Each agent sees its own position, its home
//! landmark, and every other agent, all relative to itself.
//!
//! The reward tracks only agent 0 and landmark 0, for every agent alike. The
//! collision loop runs over all agents including the scored one, so with the
//! default configuration every colliding agent pays at least one penalty per call
//! for overlapping itself. Set `reward.count_self_collision = false` to skip it.

use rand::RngCore;
use tracing::{info, warn};

use super::{BenchmarkData, Scenario};
use crate::components::{
    checked_distance, checked_relative_position, try_is_collision, Agent, Entity, World,
};
use crate::config::{ScenarioConfig, ZeroDistancePolicy};
use crate::error::{ConfigError, EntityList, ScenarioError};
use crate::setup;

/// The cooperative navigation scenario
#[derive(Debug, Clone, Default)]
pub struct CooperativeNavigation {
    config: ScenarioConfig,
}

impl CooperativeNavigation {
    pub const NAME: &'static str = "cooperative_navigation";

    /// Scenario with a validated configuration
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Whether `other` counts against `agent` in the collision loops
    fn counts_against(&self, other: &Agent, agent: &Agent) -> Result<bool, ScenarioError> {
        if !self.config.reward.count_self_collision && other.id == agent.id {
            return Ok(false);
        }
        try_is_collision(other, agent)
    }
}

impl Scenario for CooperativeNavigation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn make_world(&self, rng: &mut dyn RngCore) -> World {
        let world_config = &self.config.world;

        let mut world = World::new(world_config.dim_p, world_config.dim_c);
        world.collaborative = world_config.collaborative;
        world.agents = setup::spawn_agents(&self.config);
        world.landmarks = setup::spawn_landmarks(&self.config);

        info!(
            scenario = Self::NAME,
            agents = world.agents.len(),
            landmarks = world.landmarks.len(),
            dim_p = world.dim_p,
            dim_c = world.dim_c,
            "Created world"
        );

        self.reset_world(&mut world, rng);
        world
    }

    fn reset_world(&self, world: &mut World, rng: &mut dyn RngCore) {
        setup::assign_colors(world);
        setup::scatter_entities(world, rng, self.config.entities.spawn_range);
    }

    fn reward(&self, agent: &Agent, world: &World) -> Result<f64, ScenarioError> {
        let params = &self.config.reward;

        let tracked = world.agents.first().ok_or(ScenarioError::MissingEntity {
            list: EntityList::Agents,
            index: 0,
        })?;
        let target = world.landmarks.first().ok_or(ScenarioError::MissingEntity {
            list: EntityList::Landmarks,
            index: 0,
        })?;
        let dist = checked_distance(tracked.position(), target.position())?;

        let mut rew = if dist < params.near_radius {
            if dist == 0.0 && params.zero_distance == ZeroDistancePolicy::Error {
                return Err(ScenarioError::DivisionByZero);
            }
            1.0 / dist
        } else {
            -dist
        };

        if agent.collide {
            for other in &world.agents {
                if self.counts_against(other, agent)? {
                    rew -= params.collision_penalty;
                }
            }
        }

        if !rew.is_finite() {
            warn!(agent = agent.id, reward = rew, "Non-finite reward: agent 0 is on landmark 0");
        }
        Ok(rew)
    }

    fn observation(&self, agent: &Agent, world: &World) -> Result<Vec<f64>, ScenarioError> {
        let own = agent.position();
        if own.len() != world.dim_p {
            return Err(ScenarioError::DimensionMismatch {
                expected: world.dim_p,
                actual: own.len(),
            });
        }

        let mut obs = Vec::with_capacity(world.observation_len());
        obs.extend_from_slice(own);

        // Worlds built outside make_world can break the agent/landmark pairing
        if world.home_landmark(agent).is_none() {
            return Err(ScenarioError::MissingEntity {
                list: EntityList::Landmarks,
                index: agent.id,
            });
        }
        for landmark in world.landmarks.iter().filter(|l| l.id == agent.id) {
            obs.extend(checked_relative_position(landmark.position(), own)?);
        }

        // IDs are unique within a world, so matching on ID skips exactly the observer
        for other in world.agents.iter().filter(|o| o.id != agent.id) {
            obs.extend(checked_relative_position(other.position(), own)?);
        }

        Ok(obs)
    }

    fn benchmark_data(&self, agent: &Agent, world: &World) -> Result<BenchmarkData, ScenarioError> {
        let params = &self.config.reward;
        let mut data = BenchmarkData::default();

        if !world.landmarks.is_empty() && world.agents.is_empty() {
            return Err(ScenarioError::MissingEntity {
                list: EntityList::Agents,
                index: 0,
            });
        }

        for landmark in &world.landmarks {
            let mut nearest = f64::INFINITY;
            for a in &world.agents {
                nearest = nearest.min(checked_distance(a.position(), landmark.position())?);
            }
            data.min_dists += nearest;
            data.reward -= nearest;
            if nearest < params.occupied_threshold {
                data.occupied_landmarks += 1;
            }
        }

        if agent.collide {
            for other in &world.agents {
                if self.counts_against(other, agent)? {
                    data.reward -= params.benchmark_collision_penalty;
                    data.collisions += 1;
                }
            }
        }

        Ok(data)
    }
}
