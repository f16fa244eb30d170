//! World Components
//!
//! Agents, landmarks, their kinematic state, and the world container that owns them.

pub mod entity;
pub mod agent;
pub mod landmark;
pub mod world;

pub use entity::*;
pub use agent::*;
pub use landmark::*;
pub use world::*;
