//! Episode Evaluation
//!
//! Builds a world once, then for every episode resets it and records each agent's
//! observation, reward and benchmark diagnostics. The world is not stepped; each
//! episode is evaluated at its reset state.

use rand::RngCore;
use scenario_events::{generate_record_id, AgentStepRecord, EpisodeSummary, Record};
use tracing::{debug, info};

use crate::components::World;
use crate::error::{EvaluationError, ScenarioError};
use crate::output::RecordLogger;
use crate::scenario::Scenario;

/// What to evaluate and what to write
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    pub episodes: u64,
    /// Attach benchmark diagnostics to each agent record
    pub include_benchmark: bool,
    /// Write a world snapshot at every reset
    pub include_snapshots: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            episodes: 10,
            include_benchmark: true,
            include_snapshots: false,
        }
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    pub episodes: u64,
    pub records_written: u64,
    /// Mean over episodes of the per-episode mean reward
    pub mean_reward: f64,
    pub total_collisions: u32,
    pub total_occupied_landmarks: u32,
}

/// Runs a scenario's hooks over successive resets
pub struct EpisodeEvaluator<'a> {
    scenario: &'a dyn Scenario,
    next_record_id: u64,
}

impl<'a> EpisodeEvaluator<'a> {
    pub fn new(scenario: &'a dyn Scenario) -> Self {
        Self {
            scenario,
            next_record_id: 0,
        }
    }

    fn next_id(&mut self) -> String {
        let id = generate_record_id(self.next_record_id);
        self.next_record_id += 1;
        id
    }

    /// Evaluate every agent of `world` as it stands
    pub fn evaluate_world(
        &mut self,
        world: &World,
        episode: u64,
        step: u64,
        include_benchmark: bool,
    ) -> Result<(Vec<AgentStepRecord>, EpisodeSummary), ScenarioError> {
        let mut records = Vec::with_capacity(world.agents.len());
        let mut reward_sum = 0.0;
        let mut total_collisions = 0;
        let mut landmark_terms = None;

        for agent in &world.agents {
            let observation = self.scenario.observation(agent, world)?;
            let reward = self.scenario.reward(agent, world)?;
            let benchmark = self.scenario.benchmark_data(agent, world)?;

            debug!(episode, agent = agent.id, reward, collisions = benchmark.collisions, "Evaluated agent");

            reward_sum += reward;
            total_collisions += benchmark.collisions;
            landmark_terms.get_or_insert((benchmark.occupied_landmarks, benchmark.min_dists));

            records.push(AgentStepRecord {
                record_id: self.next_id(),
                episode,
                step,
                agent_id: agent.id,
                agent_name: agent.name.clone(),
                observation,
                reward,
                benchmark: include_benchmark.then(|| benchmark.into()),
            });
        }

        let (occupied_landmarks, min_dists) = landmark_terms.unwrap_or((0, 0.0));
        let summary = EpisodeSummary {
            episode,
            agents: world.agents.len(),
            mean_reward: if records.is_empty() {
                0.0
            } else {
                reward_sum / records.len() as f64
            },
            total_collisions,
            occupied_landmarks,
            min_dists,
        };

        Ok((records, summary))
    }

    /// Build a world and evaluate `options.episodes` resets of it, logging every record
    pub fn run(
        &mut self,
        rng: &mut dyn RngCore,
        options: &EvaluationOptions,
        logger: &mut RecordLogger,
    ) -> Result<EvaluationReport, EvaluationError> {
        info!(
            scenario = self.scenario.name(),
            episodes = options.episodes,
            "Starting evaluation"
        );

        let mut report = EvaluationReport::default();
        let mut world = self.scenario.make_world(rng);
        let mut reward_sum = 0.0;

        for episode in 0..options.episodes {
            // make_world already reset the first episode
            if episode > 0 {
                self.scenario.reset_world(&mut world, rng);
            }

            if options.include_snapshots {
                logger.log(&Record::Snapshot(world.snapshot(episode, 0)))?;
            }

            let (records, summary) = self
                .evaluate_world(&world, episode, 0, options.include_benchmark)
                .map_err(|source| EvaluationError::Scenario { episode, source })?;

            for record in records {
                logger.log(&Record::AgentStep(record))?;
            }

            reward_sum += summary.mean_reward;
            report.total_collisions += summary.total_collisions;
            report.total_occupied_landmarks += summary.occupied_landmarks;
            report.episodes += 1;

            if episode % 100 == 0 {
                info!(
                    episode,
                    mean_reward = summary.mean_reward,
                    collisions = summary.total_collisions,
                    "Episode evaluated"
                );
            }
            logger.log(&Record::EpisodeSummary(summary))?;
        }

        logger.flush()?;
        if report.episodes > 0 {
            report.mean_reward = reward_sum / report.episodes as f64;
        }
        report.records_written = logger.record_count();

        info!(
            episodes = report.episodes,
            records = report.records_written,
            mean_reward = report.mean_reward,
            "Evaluation complete"
        );
        Ok(report)
    }
}
