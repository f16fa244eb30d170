//! World Setup
//!
//! Entity spawning and per-episode randomization.

pub mod world;

pub use world::*;
