//! Entity Components
//!
//! Kinematic state and the capability set shared by agents and landmarks.

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// RGB color, each channel in 0.0-1.0
pub type Color = [f64; 3];

/// Color of entities with an even ID
pub const EVEN_ID_COLOR: Color = [0.5, 0.5, 0.0];

/// Color of entities with an odd ID
pub const ODD_ID_COLOR: Color = [0.0, 0.5, 0.5];

/// Default physical radius of an entity
pub const DEFAULT_ENTITY_SIZE: f64 = 0.05;

/// Color assigned by ID parity
pub fn parity_color(id: usize) -> Color {
    if id % 2 == 0 {
        EVEN_ID_COLOR
    } else {
        ODD_ID_COLOR
    }
}

/// Physical state of any entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    /// Position, `dim_p` components
    pub p_pos: Vec<f64>,
    /// Velocity, `dim_p` components
    pub p_vel: Vec<f64>,
}

impl EntityState {
    /// State at the origin, at rest
    pub fn at_rest(dim_p: usize) -> Self {
        Self {
            p_pos: vec![0.0; dim_p],
            p_vel: vec![0.0; dim_p],
        }
    }
}

/// Physical state of an agent: entity state plus its communication utterance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    #[serde(flatten)]
    pub physical: EntityState,
    /// Communication vector, `dim_c` components
    pub c: Vec<f64>,
}

impl AgentState {
    pub fn at_rest(dim_p: usize, dim_c: usize) -> Self {
        Self {
            physical: EntityState::at_rest(dim_p),
            c: vec![0.0; dim_c],
        }
    }
}

/// Capability set shared by agents and landmarks
pub trait Entity {
    fn name(&self) -> &str;
    fn id(&self) -> usize;
    /// Physical radius
    fn size(&self) -> f64;
    fn collides(&self) -> bool;
    fn movable(&self) -> bool;
    fn color(&self) -> Color;
    fn state(&self) -> &EntityState;
    fn state_mut(&mut self) -> &mut EntityState;

    fn position(&self) -> &[f64] {
        &self.state().p_pos
    }

    fn velocity(&self) -> &[f64] {
        &self.state().p_vel
    }
}

/// Euclidean distance between two points.
///
/// Components past the shorter of the two are ignored; use [`checked_distance`]
/// where a dimension mismatch must be reported.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Euclidean distance that refuses points of different dimensionality
pub fn checked_distance(a: &[f64], b: &[f64]) -> Result<f64, ScenarioError> {
    if a.len() != b.len() {
        return Err(ScenarioError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(distance(a, b))
}

/// `to - from`, component-wise.
///
/// Components past the shorter of the two are ignored; use
/// [`checked_relative_position`] where a dimension mismatch must be reported.
pub fn relative_position(to: &[f64], from: &[f64]) -> Vec<f64> {
    to.iter().zip(from).map(|(t, f)| t - f).collect()
}

/// `to - from`, refusing points of different dimensionality
pub fn checked_relative_position(to: &[f64], from: &[f64]) -> Result<Vec<f64>, ScenarioError> {
    if to.len() != from.len() {
        return Err(ScenarioError::DimensionMismatch {
            expected: from.len(),
            actual: to.len(),
        });
    }
    Ok(relative_position(to, from))
}

/// True iff the two entities overlap: their centers are strictly closer than the sum of their radii.
///
/// An entity always collides with itself unless its size is zero. Both positions
/// must have the same dimension; otherwise only the shared leading components are
/// compared. [`try_is_collision`] reports the mismatch instead.
pub fn is_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    let dist = distance(a.position(), b.position());
    let dist_min = a.size() + b.size();
    dist < dist_min
}

/// [`is_collision`] that fails on positions of different dimensionality
pub fn try_is_collision<A, B>(a: &A, b: &B) -> Result<bool, ScenarioError>
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    let dist = checked_distance(a.position(), b.position())?;
    Ok(dist < a.size() + b.size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Agent, Landmark};

    fn agent_at(id: usize, pos: [f64; 2], size: f64) -> Agent {
        let mut agent = Agent::new(id, 2, 2);
        agent.size = size;
        agent.state.physical.p_pos = pos.to_vec();
        agent
    }

    #[test]
    fn test_parity_color() {
        assert_eq!(parity_color(0), [0.5, 0.5, 0.0]);
        assert_eq!(parity_color(1), [0.0, 0.5, 0.5]);
        assert_eq!(parity_color(6), EVEN_ID_COLOR);
        assert_eq!(parity_color(7), ODD_ID_COLOR);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(distance(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_checked_distance_mismatch() {
        let err = checked_distance(&[0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_relative_position() {
        assert_eq!(relative_position(&[0.0, 2.0], &[1.0, 1.0]), vec![-1.0, 1.0]);
    }

    #[test]
    fn test_checked_relative_position_mismatch() {
        assert_eq!(
            checked_relative_position(&[2.0], &[1.0, 1.0]),
            Err(ScenarioError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(checked_relative_position(&[2.0, 0.0], &[1.0, 1.0]), Ok(vec![1.0, -1.0]));
    }

    #[test]
    fn test_try_is_collision_rejects_mixed_dimensions() {
        let a = agent_at(0, [5.0, 0.0], 0.05);
        let mut b = agent_at(1, [0.0, 0.0], 0.05);
        b.state.physical.p_pos = vec![5.0];

        assert!(matches!(
            try_is_collision(&a, &b),
            Err(ScenarioError::DimensionMismatch { .. })
        ));
        assert_eq!(try_is_collision(&a, &a), Ok(true));
    }

    #[test]
    fn test_self_collision() {
        let agent = agent_at(0, [1.5, -2.0], 0.05);
        assert!(is_collision(&agent, &agent));

        let zero = agent_at(1, [0.0, 0.0], 0.0);
        assert!(!is_collision(&zero, &zero));
    }

    #[test]
    fn test_collision_is_strict() {
        let a = agent_at(0, [0.0, 0.0], 0.25);
        let touching = agent_at(1, [0.5, 0.0], 0.25);
        let overlapping = agent_at(1, [0.49, 0.0], 0.25);

        assert!(!is_collision(&a, &touching));
        assert!(is_collision(&a, &overlapping));
    }

    #[test]
    fn test_collision_between_agent_and_landmark() {
        let a = agent_at(0, [0.0, 0.0], 0.05);
        let mut landmark = Landmark::new(0, 2);
        landmark.state.p_pos = vec![0.0, 0.08];

        assert!(is_collision(&a, &landmark));
        assert!(is_collision(&landmark, &a));
    }
}
