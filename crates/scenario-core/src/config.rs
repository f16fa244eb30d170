//! Configuration System
//!
//! Loads scenario parameters from a TOML file. Every field has a default, and the
//! defaults describe the standard two-agent cooperative navigation world.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Complete scenario configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Entity counts and dimensions
    #[serde(default)]
    pub world: WorldConfig,
    /// Entity physical properties and spawn area
    #[serde(default)]
    pub entities: EntityConfig,
    /// Reward and benchmark shaping
    #[serde(default)]
    pub reward: RewardConfig,
}

impl ScenarioConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the invariants world construction relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.world.num_agents == 0 {
            return invalid("num_agents must be at least 1".into());
        }
        // Observations pair agent i with landmark i
        if self.world.num_landmarks != self.world.num_agents {
            return invalid(format!(
                "num_landmarks ({}) must equal num_agents ({}) so every agent has a home landmark",
                self.world.num_landmarks, self.world.num_agents
            ));
        }
        if self.world.dim_p == 0 {
            return invalid("dim_p must be at least 1".into());
        }
        if !(self.entities.agent_size > 0.0) {
            return invalid(format!("agent_size must be positive, got {}", self.entities.agent_size));
        }
        if !(self.entities.landmark_size >= 0.0) {
            return invalid(format!(
                "landmark_size must be non-negative, got {}",
                self.entities.landmark_size
            ));
        }
        if !(self.entities.spawn_range > 0.0) || !self.entities.spawn_range.is_finite() {
            return invalid(format!(
                "spawn_range must be positive and finite, got {}",
                self.entities.spawn_range
            ));
        }
        if !(self.reward.near_radius >= 0.0) {
            return invalid(format!("near_radius must be non-negative, got {}", self.reward.near_radius));
        }
        Ok(())
    }
}

/// World shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub num_agents: usize,
    /// Must equal `num_agents`
    pub num_landmarks: usize,
    /// Communication vector dimension
    pub dim_c: usize,
    /// Position dimension
    pub dim_p: usize,
    pub collaborative: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            num_agents: 2,
            num_landmarks: 2,
            dim_c: 2,
            dim_p: 2,
            collaborative: true,
        }
    }
}

/// Physical properties of spawned entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Agent radius
    pub agent_size: f64,
    /// Landmark radius
    pub landmark_size: f64,
    /// Positions are drawn from [-spawn_range, spawn_range) per dimension
    pub spawn_range: f64,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            agent_size: 0.05,
            landmark_size: 0.05,
            spawn_range: 3.0,
        }
    }
}

/// Reward and benchmark parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Below this distance the reward is `1/d`, otherwise `-d`
    pub near_radius: f64,
    /// Subtracted from the reward per collision
    pub collision_penalty: f64,
    /// Subtracted from the benchmark reward per collision
    pub benchmark_collision_penalty: f64,
    /// A landmark counts as occupied when its nearest agent is closer than this
    pub occupied_threshold: f64,
    /// Count an agent's overlap with itself as a collision
    pub count_self_collision: bool,
    /// What to do when the tracked agent sits exactly on its landmark
    pub zero_distance: ZeroDistancePolicy,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            near_radius: 1.0,
            collision_penalty: 10.0,
            benchmark_collision_penalty: 1.0,
            occupied_threshold: 0.1,
            count_self_collision: true,
            zero_distance: ZeroDistancePolicy::Infinite,
        }
    }
}

/// Handling of `1/d` when `d == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDistancePolicy {
    /// IEEE arithmetic: the near-goal term is `+inf`
    #[default]
    Infinite,
    /// Fail with `ScenarioError::DivisionByZero`
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScenarioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.num_agents, 2);
        assert_eq!(config.world.num_landmarks, 2);
        assert_eq!(config.entities.agent_size, 0.05);
        assert_eq!(config.reward.collision_penalty, 10.0);
        assert!(config.reward.count_self_collision);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ScenarioConfig::from_str("").unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            [world]
            num_agents = 3
            num_landmarks = 3

            [reward]
            zero_distance = "error"
        "#;
        let config = ScenarioConfig::from_str(toml).unwrap();
        assert_eq!(config.world.num_agents, 3);
        assert_eq!(config.world.dim_c, 2);
        assert_eq!(config.reward.zero_distance, ZeroDistancePolicy::Error);
        assert_eq!(config.reward.near_radius, 1.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScenarioConfig::default();
        let toml = config.to_toml().unwrap();
        assert_eq!(ScenarioConfig::from_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_rejects_unpaired_landmarks() {
        let toml = r#"
            [world]
            num_agents = 2
            num_landmarks = 3
        "#;
        let err = ScenarioConfig::from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("home landmark"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ScenarioConfig::default();
        config.world.num_agents = 0;
        config.world.num_landmarks = 0;
        assert!(config.validate().is_err());

        let mut config = ScenarioConfig::default();
        config.entities.agent_size = 0.0;
        assert!(config.validate().is_err());

        let mut config = ScenarioConfig::default();
        config.entities.spawn_range = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = ScenarioConfig::default();
        config.world.dim_p = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_file_matches_defaults() {
        let config = ScenarioConfig::from_str(include_str!("../../../coop_nav.toml")).unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_from_file_missing() {
        let err = ScenarioConfig::from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = ScenarioConfig::from_str("[world\nnum_agents = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
