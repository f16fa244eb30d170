//! Error types for scenario evaluation and configuration loading.

use std::path::PathBuf;

/// Which entity list a lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityList {
    Agents,
    Landmarks,
}

impl std::fmt::Display for EntityList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityList::Agents => write!(f, "agents"),
            EntityList::Landmarks => write!(f, "landmarks"),
        }
    }
}

/// Errors raised while computing rewards and diagnostics over a world.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    /// The world has fewer entities than the scenario indexes into
    #[error("world has no entry {index} in {list}")]
    MissingEntity { list: EntityList, index: usize },
    /// Two positions with different dimensionality were compared
    #[error("position dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// The tracked agent sits exactly on its landmark and the zero-distance policy is `error`
    #[error("agent 0 is at distance 0 from landmark 0; near-goal reward 1/d is undefined")]
    DivisionByZero,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Error writing TOML config
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Parsed config violates a world construction invariant
    #[error("invalid scenario config: {0}")]
    Invalid(String),
}

/// Errors from a multi-episode evaluation run.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("scenario error in episode {episode}: {source}")]
    Scenario {
        episode: u64,
        #[source]
        source: ScenarioError,
    },
    #[error("IO error writing records: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
