//! Landmark Components

use serde::{Deserialize, Serialize};

use super::entity::{Color, Entity, EntityState, DEFAULT_ENTITY_SIZE};

/// A fixed target particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    /// Stable 0-indexed ID; landmark `i` is the home landmark of agent `i`
    pub id: usize,
    pub size: f64,
    pub collide: bool,
    pub movable: bool,
    pub color: Color,
    pub state: EntityState,
}

impl Landmark {
    /// Create landmark `id` at the origin; landmarks neither collide nor move
    pub fn new(id: usize, dim_p: usize) -> Self {
        Self {
            name: format!("landmark {}", id),
            id,
            size: DEFAULT_ENTITY_SIZE,
            collide: false,
            movable: false,
            color: [0.0; 3],
            state: EntityState::at_rest(dim_p),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl Entity for Landmark {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> usize {
        self.id
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn collides(&self) -> bool {
        self.collide
    }

    fn movable(&self) -> bool {
        self.movable
    }

    fn color(&self) -> Color {
        self.color
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }
}
