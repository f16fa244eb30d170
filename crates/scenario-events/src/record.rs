//! Evaluation Records
//!
//! Per-agent and per-episode records written as JSON lines by the evaluator.

use serde::{Deserialize, Serialize};

use crate::WorldSnapshot;

/// Generates a record ID with the given sequence number.
pub fn generate_record_id(sequence: u64) -> String {
    format!("rec_{:08}", sequence)
}

/// Benchmark diagnostics for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSnapshot {
    pub reward: f64,
    pub collisions: u32,
    pub min_dists: f64,
    pub occupied_landmarks: u32,
}

/// Observation, reward and diagnostics of one agent at one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStepRecord {
    pub record_id: String,
    pub episode: u64,
    pub step: u64,
    pub agent_id: usize,
    pub agent_name: String,
    pub observation: Vec<f64>,
    /// Reward can be infinite when the tracked agent sits exactly on its landmark
    #[serde(with = "non_finite")]
    pub reward: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkSnapshot>,
}

/// Aggregates over every agent of one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub agents: usize,
    #[serde(with = "non_finite")]
    pub mean_reward: f64,
    pub total_collisions: u32,
    /// Taken from the first agent's benchmark; the landmark terms are shared by all agents
    pub occupied_landmarks: u32,
    pub min_dists: f64,
}

/// One line of evaluator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    AgentStep(AgentStepRecord),
    EpisodeSummary(EpisodeSummary),
    Snapshot(WorldSnapshot),
}

impl Record {
    /// Episode this record belongs to
    pub fn episode(&self) -> u64 {
        match self {
            Record::AgentStep(r) => r.episode,
            Record::EpisodeSummary(s) => s.episode,
            Record::Snapshot(s) => s.episode,
        }
    }

    /// Serializes the record to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// JSON has no infinities, so non-finite values are written as strings.
mod non_finite {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else if *value == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => match s.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(de::Error::custom(format!("invalid float: {}", other))),
            },
        }
    }
}
