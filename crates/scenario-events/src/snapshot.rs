//! Snapshot Types
//!
//! Serialization structs for world snapshots.
//!
//! A snapshot captures every agent and landmark of a world at one point of an
//! episode, used for analysis and debugging of resets.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID from an episode and step index.
pub fn generate_snapshot_id(episode: u64, step: u64) -> String {
    format!("snap_{:06}_{:04}", episode, step)
}

/// Which kind of entity a snapshot row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Agent,
    Landmark,
}

/// Per-entity state at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub kind: EntityKind,
    pub id: usize,
    pub name: String,
    pub size: f64,
    pub collide: bool,
    #[serde(default)]
    pub movable: bool,
    /// Whether the agent stays off the communication channel; only agents carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    pub color: [f64; 3],
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    /// Communication vector; only agents carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<Vec<f64>>,
}

/// Complete world state at one point of an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    pub episode: u64,
    pub step: u64,
    pub dim_c: usize,
    pub dim_p: usize,
    pub collaborative: bool,
    #[serde(default)]
    pub agents: Vec<EntitySnapshot>,
    #[serde(default)]
    pub landmarks: Vec<EntitySnapshot>,
}

impl WorldSnapshot {
    /// Total number of entities in the snapshot
    pub fn entity_count(&self) -> usize {
        self.agents.len() + self.landmarks.len()
    }

    /// Look up an agent row by ID
    pub fn agent(&self, id: usize) -> Option<&EntitySnapshot> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Look up a landmark row by ID
    pub fn landmark(&self, id: usize) -> Option<&EntitySnapshot> {
        self.landmarks.iter().find(|l| l.id == id)
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
