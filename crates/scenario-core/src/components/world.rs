//! World Container
//!
//! The mutable state container handed between the engine and the scenario.

use scenario_events::{generate_snapshot_id, EntityKind, EntitySnapshot, WorldSnapshot};
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::entity::Entity;
use super::landmark::Landmark;

/// Default position dimensionality
pub const DEFAULT_DIM_P: usize = 2;

/// All agents and landmarks plus the dimensional parameters of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Ordered by ID
    pub agents: Vec<Agent>,
    /// Ordered by ID
    pub landmarks: Vec<Landmark>,
    /// Communication vector dimension
    pub dim_c: usize,
    /// Position dimension
    pub dim_p: usize,
    /// Agents share a single reward signal
    pub collaborative: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_DIM_P, 0)
    }
}

impl World {
    /// Empty world with the given dimensions
    pub fn new(dim_p: usize, dim_c: usize) -> Self {
        Self {
            agents: Vec::new(),
            landmarks: Vec::new(),
            dim_c,
            dim_p,
            collaborative: false,
        }
    }

    /// Agents first, then landmarks
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        self.agents
            .iter()
            .map(|a| a as &dyn Entity)
            .chain(self.landmarks.iter().map(|l| l as &dyn Entity))
    }

    pub fn agent(&self, id: usize) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn landmark(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.id == id)
    }

    /// The landmark paired with `agent` by ID
    pub fn home_landmark(&self, agent: &Agent) -> Option<&Landmark> {
        self.landmark(agent.id)
    }

    /// Length of every agent's observation vector: own position, home landmark, each other agent
    pub fn observation_len(&self) -> usize {
        self.dim_p * (self.agents.len() + 1)
    }

    /// Rebuild a world from a snapshot, e.g. to re-score a recorded reset.
    ///
    /// Only the snapshot is consulted; no configuration validation runs, so the
    /// scenario hooks report broken agent/landmark pairing or mixed dimensions.
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        let mut world = Self::new(snapshot.dim_p, snapshot.dim_c);
        world.collaborative = snapshot.collaborative;
        world.agents = snapshot
            .agents
            .iter()
            .map(|row| {
                let mut agent = Agent::new(row.id, snapshot.dim_p, snapshot.dim_c)
                    .with_size(row.size)
                    .with_collide(row.collide)
                    .with_silent(row.silent.unwrap_or(false));
                agent.name = row.name.clone();
                agent.movable = row.movable;
                agent.color = row.color;
                agent.state.physical.p_pos = row.position.clone();
                agent.state.physical.p_vel = row.velocity.clone();
                if let Some(c) = &row.communication {
                    agent.state.c = c.clone();
                }
                agent
            })
            .collect();
        world.landmarks = snapshot
            .landmarks
            .iter()
            .map(|row| {
                let mut landmark = Landmark::new(row.id, snapshot.dim_p).with_size(row.size);
                landmark.name = row.name.clone();
                landmark.collide = row.collide;
                landmark.movable = row.movable;
                landmark.color = row.color;
                landmark.state.p_pos = row.position.clone();
                landmark.state.p_vel = row.velocity.clone();
                landmark
            })
            .collect();
        world
    }

    /// Capture every entity for output
    pub fn snapshot(&self, episode: u64, step: u64) -> WorldSnapshot {
        WorldSnapshot {
            snapshot_id: generate_snapshot_id(episode, step),
            episode,
            step,
            dim_c: self.dim_c,
            dim_p: self.dim_p,
            collaborative: self.collaborative,
            agents: self
                .agents
                .iter()
                .map(|a| EntitySnapshot {
                    silent: Some(a.silent),
                    communication: Some(a.state.c.clone()),
                    ..entity_snapshot(EntityKind::Agent, a)
                })
                .collect(),
            landmarks: self
                .landmarks
                .iter()
                .map(|l| entity_snapshot(EntityKind::Landmark, l))
                .collect(),
        }
    }
}

fn entity_snapshot(kind: EntityKind, entity: &dyn Entity) -> EntitySnapshot {
    EntitySnapshot {
        kind,
        id: entity.id(),
        name: entity.name().to_string(),
        size: entity.size(),
        collide: entity.collides(),
        movable: entity.movable(),
        silent: None,
        color: entity.color(),
        position: entity.position().to_vec(),
        velocity: entity.velocity().to_vec(),
        communication: None,
    }
}
