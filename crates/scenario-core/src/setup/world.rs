//! World Construction
//!
//! Creates agents and landmarks with sequential IDs and scatters them over the spawn area.

use rand::{Rng, RngCore};

use crate::components::{parity_color, Agent, Entity, Landmark, World};
use crate::config::ScenarioConfig;

/// Create the configured number of agents with IDs `0..num_agents`
pub fn spawn_agents(config: &ScenarioConfig) -> Vec<Agent> {
    (0..config.world.num_agents)
        .map(|i| {
            Agent::new(i, config.world.dim_p, config.world.dim_c)
                .with_size(config.entities.agent_size)
                .with_collide(true)
                .with_silent(true)
        })
        .collect()
}

/// Create the configured number of landmarks with IDs `0..num_landmarks`
pub fn spawn_landmarks(config: &ScenarioConfig) -> Vec<Landmark> {
    (0..config.world.num_landmarks)
        .map(|i| Landmark::new(i, config.world.dim_p).with_size(config.entities.landmark_size))
        .collect()
}

/// Color every entity by the parity of its ID
pub fn assign_colors(world: &mut World) {
    for agent in &mut world.agents {
        agent.color = parity_color(agent.id);
    }
    for landmark in &mut world.landmarks {
        landmark.color = parity_color(landmark.id);
    }
}

/// Uniform point in `[-range, range)` per dimension
pub fn random_position(rng: &mut dyn RngCore, dim_p: usize, range: f64) -> Vec<f64> {
    (0..dim_p).map(|_| rng.gen_range(-range..range)).collect()
}

/// Give every entity a fresh random position and zero its velocity and communication.
///
/// Agents are placed first, then landmarks, so a given seed always lays out the
/// same world.
pub fn scatter_entities(world: &mut World, rng: &mut dyn RngCore, range: f64) {
    let (dim_p, dim_c) = (world.dim_p, world.dim_c);

    for agent in &mut world.agents {
        let state = agent.state_mut();
        state.p_pos = random_position(rng, dim_p, range);
        state.p_vel = vec![0.0; dim_p];
        agent.state.c = vec![0.0; dim_c];
    }
    for landmark in &mut world.landmarks {
        let state = landmark.state_mut();
        state.p_pos = random_position(rng, dim_p, range);
        state.p_vel = vec![0.0; dim_p];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_counts_and_ids() {
        let config = ScenarioConfig::default();
        let agents = spawn_agents(&config);
        let landmarks = spawn_landmarks(&config);

        assert_eq!(agents.iter().map(|a| a.id).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(landmarks.iter().map(|l| l.id).collect::<Vec<_>>(), vec![0, 1]);
        assert!(agents.iter().all(|a| a.collide && a.silent && a.size == 0.05));
        assert!(landmarks.iter().all(|l| !l.collide && !l.movable));
    }

    #[test]
    fn test_random_position_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = random_position(&mut rng, 3, 3.0);
            assert_eq!(pos.len(), 3);
            assert!(pos.iter().all(|x| (-3.0..=3.0).contains(x)));
        }
    }

    #[test]
    fn test_scatter_zeroes_motion() {
        let config = ScenarioConfig::default();
        let mut world = World::new(2, 2);
        world.agents = spawn_agents(&config);
        world.landmarks = spawn_landmarks(&config);
        world.agents[0].state.physical.p_vel = vec![1.0, -1.0];
        world.agents[1].state.c = vec![0.3, 0.7];

        let mut rng = SmallRng::seed_from_u64(11);
        scatter_entities(&mut world, &mut rng, 3.0);

        assert!(world.entities().all(|e| e.velocity() == [0.0, 0.0]));
        assert!(world.agents.iter().all(|a| a.communication() == [0.0, 0.0]));
    }

    #[test]
    fn test_assign_colors() {
        let config = ScenarioConfig::default();
        let mut world = World::new(2, 2);
        world.agents = spawn_agents(&config);
        world.landmarks = spawn_landmarks(&config);
        assign_colors(&mut world);

        assert_eq!(world.agents[0].color, [0.5, 0.5, 0.0]);
        assert_eq!(world.agents[1].color, [0.0, 0.5, 0.5]);
        assert_eq!(world.landmarks[0].color, [0.5, 0.5, 0.0]);
        assert_eq!(world.landmarks[1].color, [0.0, 0.5, 0.5]);
    }
}
