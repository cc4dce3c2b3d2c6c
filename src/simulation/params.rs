//! Tunable simulation parameters, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ConfigError;

/// Simulation parameters that control physics, sensing and evolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Forward acceleration per unit of positive throttle.
    pub accel_forward: f64,
    /// Reverse acceleration per unit of negative throttle.
    pub accel_backward: f64,
    /// Heading change rate per unit of steering (radians per second).
    pub turn_scalar: f64,
    /// Speed cap, applied as `speed_max * delta`.
    pub speed_max: f64,
    /// Overall braking strength of friction.
    pub friction_strength: f64,
    /// Friction coefficient when wheels are aligned with velocity.
    pub friction_parallel: f64,
    /// Friction coefficient when wheels are perpendicular to velocity.
    pub friction_perpendicular: f64,
    /// Longest distance a sensor ray reports.
    pub ray_max_distance: f64,
    /// Marching increment of a sensor ray, in pixels.
    pub ray_step_size: f64,
    /// Widths of the hidden controller layers.
    pub hidden_layers: Vec<usize>,
    /// Population size.
    pub num_cars: usize,
    /// Number of elites carried into the next generation.
    pub num_best_reproduce: usize,
    /// Per-weight probability of mutation.
    pub mutation_chance: f64,
    /// Mutation noise is drawn from `[-mutation_max, mutation_max]`.
    pub mutation_max: f64,
    /// Seconds between reaching the death threshold and turnover.
    pub turnover_delay: f64,
    /// Longest frame delta the clock hands out (seconds).
    pub max_frame_delta: f64,
    /// Seed for selection, crossover and mutation draws.
    pub rng_seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            accel_forward: 300.0,
            accel_backward: 200.0,
            turn_scalar: 5.0,
            speed_max: 15000.0,
            friction_strength: 200.0,
            friction_parallel: 0.05,
            friction_perpendicular: 0.7,
            ray_max_distance: 800.0,
            ray_step_size: 3.0,
            hidden_layers: vec![8],
            num_cars: 25,
            num_best_reproduce: 5,
            mutation_chance: 0.8,
            mutation_max: 0.05,
            turnover_delay: 1.0,
            max_frame_delta: 0.25,
            rng_seed: None,
        }
    }
}

impl Params {
    /// Parses parameters from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of agents that must be dead before a turnover is scheduled.
    pub fn death_threshold(&self) -> usize {
        self.num_cars.saturating_sub(self.num_best_reproduce * 2)
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name, reason| Err(ConfigError::Invalid { name, reason });

        if self.num_cars == 0 {
            return invalid("num_cars", "must be at least 1");
        }
        if self.num_best_reproduce == 0 || self.num_best_reproduce > self.num_cars {
            return invalid("num_best_reproduce", "must be between 1 and num_cars");
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return invalid("mutation_chance", "must be a probability in [0, 1]");
        }
        if !(self.mutation_max >= 0.0 && self.mutation_max.is_finite()) {
            return invalid("mutation_max", "must be finite and non-negative");
        }
        if !(self.ray_step_size > 0.0) {
            return invalid("ray_step_size", "must be positive");
        }
        if !(self.ray_max_distance >= 0.0) {
            return invalid("ray_max_distance", "must be non-negative");
        }
        if !(self.speed_max > 0.0) {
            return invalid("speed_max", "must be positive");
        }
        if !(self.turnover_delay >= 0.0) {
            return invalid("turnover_delay", "must be non-negative");
        }
        if !(self.max_frame_delta > 0.0) {
            return invalid("max_frame_delta", "must be positive");
        }
        if self.hidden_layers.contains(&0) {
            return invalid("hidden_layers", "layer widths must be non-zero");
        }
        Ok(())
    }
}
