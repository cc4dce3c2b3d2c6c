//! Generational genetic algorithm over a population of agents.
//!
//! The trainer steps every live agent in parallel, counts deaths once all
//! agents have moved, and replaces the population with elites plus their
//! offspring a fixed delay after enough agents have died.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::agent::{Agent, Perception};
use super::error::{ConfigError, SimError};
use super::genetics;
use super::params::Params;
use super::stats::{GenerationRecord, GenerationStats};
use super::track::Track;
use super::vector2::Vector2;

/// Where the trainer is in the generation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainerPhase {
    /// Agents are being stepped.
    Running,
    /// The death threshold was reached; turnover happens when `remaining`
    /// seconds of simulation time have passed. Live agents keep driving.
    AwaitingTurnover {
        /// Seconds left before turnover.
        remaining: f64,
    },
    /// The population is being replaced. No stepping happens in this phase.
    Reproducing,
}

/// Owns the population and evolves it generation by generation.
pub struct Trainer {
    agents: Vec<Agent>,
    origin: Vector2,
    phase: TrainerPhase,
    generation: u32,
    perception: Perception,
    rng: StdRng,
    stats: GenerationStats,
}

impl Trainer {
    /// Creates a trainer with a fresh random population spawned at `origin`.
    pub fn new(origin: Vector2, params: &Params) -> Result<Self, SimError> {
        let agents = (0..params.num_cars)
            .map(|_| Agent::new_random(origin, &params.hidden_layers))
            .collect();
        Self::with_agents(agents, origin, params)
    }

    /// Creates a trainer around an existing population.
    ///
    /// The population must have exactly `params.num_cars` agents, all with
    /// `params.hidden_layers` as their controller topology.
    pub fn with_agents(
        agents: Vec<Agent>,
        origin: Vector2,
        params: &Params,
    ) -> Result<Self, SimError> {
        params.validate()?;
        if agents.len() != params.num_cars {
            return Err(ConfigError::Invalid {
                name: "num_cars",
                reason: "population size must equal num_cars",
            }
            .into());
        }
        if agents
            .iter()
            .any(|a| a.controller.hidden_layers() != params.hidden_layers)
        {
            return Err(ConfigError::Invalid {
                name: "hidden_layers",
                reason: "every agent controller must have the configured hidden layers",
            }
            .into());
        }
        if params.num_cars < params.num_best_reproduce * 2 {
            warn!(
                num_cars = params.num_cars,
                num_best_reproduce = params.num_best_reproduce,
                "fewer than twice as many cars as elites, turnover may trigger before any real selection"
            );
        }

        Ok(Self {
            agents,
            origin,
            phase: TrainerPhase::Running,
            generation: 0,
            perception: Perception::default(),
            rng: seeded_rng(params),
            stats: GenerationStats::default(),
        })
    }

    /// Current population.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Spawn point used for every new generation.
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> TrainerPhase {
        self.phase
    }

    /// Number of completed turnovers.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// History of finished generations.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Senses used by every agent.
    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    /// Number of dead agents in the current generation.
    pub fn dead_count(&self) -> usize {
        self.agents.iter().filter(|a| !a.is_alive()).count()
    }

    /// Number of live agents in the current generation.
    pub fn alive_count(&self) -> usize {
        self.agents.len() - self.dead_count()
    }

    /// Live agent with the highest fitness so far.
    pub fn leader(&self) -> Option<&Agent> {
        self.agents
            .iter()
            .filter(|a| a.is_alive())
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }

    /// Advances the generation by `delta` seconds.
    ///
    /// All agents are stepped before deaths are counted, so the turnover
    /// decision never sees a half-updated population.
    pub fn tick(&mut self, delta: f64, track: &Track, params: &Params) -> Result<(), SimError> {
        if self.phase == TrainerPhase::Reproducing {
            return Ok(());
        }

        let perception = &self.perception;
        self.agents
            .par_iter_mut()
            .for_each(|agent| agent.step(delta, track, perception, params));

        self.phase = match self.phase {
            TrainerPhase::Running => {
                let dead = self.dead_count();
                if dead >= params.death_threshold() {
                    debug!(
                        generation = self.generation,
                        dead,
                        delay = params.turnover_delay,
                        "death threshold reached, scheduling turnover"
                    );
                    TrainerPhase::AwaitingTurnover {
                        remaining: params.turnover_delay,
                    }
                } else {
                    TrainerPhase::Running
                }
            }
            TrainerPhase::AwaitingTurnover { remaining } => TrainerPhase::AwaitingTurnover {
                remaining: remaining - delta,
            },
            TrainerPhase::Reproducing => TrainerPhase::Reproducing,
        };

        if let TrainerPhase::AwaitingTurnover { remaining } = self.phase {
            if remaining <= 0.0 {
                self.next_iteration(params)?;
            }
        }

        Ok(())
    }

    /// Replaces the population with the elites and their offspring.
    ///
    /// 1. Every remaining live agent is killed.
    /// 2. Agents are stably sorted by descending fitness.
    /// 3. The top `num_best_reproduce` survive with their weights, reset to
    ///    the origin.
    /// 4. Every other slot gets a child of two elites picked uniformly at
    ///    random (possibly the same one twice), built by uniform crossover
    ///    followed by mutation.
    pub fn next_iteration(&mut self, params: &Params) -> Result<(), SimError> {
        self.phase = TrainerPhase::Reproducing;

        let record = GenerationRecord::from_agents(self.generation, &self.agents);
        info!(
            generation = record.generation,
            best_fitness = record.best_fitness,
            mean_fitness = record.mean_fitness,
            survivors = record.survivors,
            "generation finished"
        );
        self.stats.record(record);

        for agent in &mut self.agents {
            agent.kill();
        }

        // sort_by is stable: equal fitness keeps population order
        self.agents
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        let num_best = params.num_best_reproduce.min(self.agents.len());
        let mut next = Vec::with_capacity(params.num_cars);

        for elite in &self.agents[..num_best] {
            next.push(elite.respawn(self.origin)?);
        }

        while next.len() < params.num_cars {
            let parent1 = &self.agents[self.rng.random_range(0..num_best)];
            let parent2 = &self.agents[self.rng.random_range(0..num_best)];
            let controller = genetics::breed(
                &parent1.controller,
                &parent2.controller,
                params.mutation_chance,
                params.mutation_max,
                &mut self.rng,
            )?;
            next.push(Agent::new(self.origin, controller));
        }

        self.agents = next;
        self.generation += 1;
        self.phase = TrainerPhase::Running;
        Ok(())
    }
}

fn seeded_rng(params: &Params) -> StdRng {
    match params.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
