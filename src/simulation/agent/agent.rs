//! Agent state and per-tick behavior.

use serde::{Deserialize, Serialize};

use super::super::brain::{Controller, INPUT_SIZE};
use super::super::error::SimError;
use super::super::params::Params;
use super::super::track::Track;
use super::super::vector2::Vector2;
use super::super::vehicle::VehicleState;
use super::perception::Perception;

/// One simulated car: physics, controller and bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Physical state.
    pub state: VehicleState,
    /// Network that drives the car.
    pub controller: Controller,
    /// Dead agents are no longer stepped.
    pub alive: bool,
    /// Distance travelled while alive.
    pub fitness: f64,
}

impl Agent {
    /// Creates a live agent at rest at `origin`.
    pub fn new(origin: Vector2, controller: Controller) -> Self {
        Self {
            state: VehicleState::new(origin),
            controller,
            alive: true,
            fitness: 0.0,
        }
    }

    /// Creates a live agent with a randomly initialized controller.
    pub fn new_random(origin: Vector2, hidden_layers: &[usize]) -> Self {
        Self::new(origin, Controller::new_random(hidden_layers))
    }

    /// Checks if the agent is still being stepped.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Stops the agent. It counts towards the generation's dead total.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Moves the car back to `origin` at rest. Leaves `alive` and `fitness`
    /// untouched.
    pub fn reset(&mut self, origin: Vector2) {
        self.state.reset(origin);
    }

    /// A fresh live copy of this agent at `origin`: the weights are copied
    /// into a newly built controller, fitness starts over.
    pub fn respawn(&self, origin: Vector2) -> Result<Self, SimError> {
        let mut controller = Controller::zeroed(&self.controller.hidden_layers());
        controller.set_weights(self.controller.weights())?;
        Ok(Self::new(origin, controller))
    }

    /// Controller inputs for the current state.
    pub fn sense(&self, track: &Track, perception: &Perception, params: &Params) -> [f64; INPUT_SIZE] {
        perception.perceive(&self.state, track, params)
    }

    /// Advances the agent by `delta` seconds. No-op once dead.
    ///
    /// The car dies as soon as its position is off the track; the distance
    /// of that final step still counts towards fitness.
    pub fn step(&mut self, delta: f64, track: &Track, perception: &Perception, params: &Params) {
        if !self.alive {
            return;
        }

        let inputs = self.sense(track, perception, params);
        let (forward, turn) = self.controller.controls(&inputs);
        self.state.update(forward, turn, delta, params);
        self.fitness += self.state.last_step_distance();

        if track.off_track(self.state.position) {
            self.kill();
        }
    }
}
