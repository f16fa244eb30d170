//! Agent Components

use serde::{Deserialize, Serialize};

use super::entity::{AgentState, Color, Entity, EntityState, DEFAULT_ENTITY_SIZE};

/// A controllable particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    /// Stable 0-indexed ID, assigned once when the world is built
    pub id: usize,
    pub size: f64,
    pub collide: bool,
    /// Silent agents do not communicate
    pub silent: bool,
    pub movable: bool,
    pub color: Color,
    pub state: AgentState,
}

impl Agent {
    /// Create agent `id` at rest at the origin
    pub fn new(id: usize, dim_p: usize, dim_c: usize) -> Self {
        Self {
            name: format!("agent {}", id),
            id,
            size: DEFAULT_ENTITY_SIZE,
            collide: true,
            silent: false,
            movable: true,
            color: [0.0; 3],
            state: AgentState::at_rest(dim_p, dim_c),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_collide(mut self, collide: bool) -> Self {
        self.collide = collide;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Communication vector
    pub fn communication(&self) -> &[f64] {
        &self.state.c
    }
}

impl Entity for Agent {
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
        &self.state.physical
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state.physical
    }
}
