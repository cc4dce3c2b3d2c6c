//! Top-level simulation driven once per rendered frame.
//!
//! A world starts without a course. Agents are only spawned once the course
//! raster has been decoded and handed over through [`World::load_track`],
//! which may happen exactly once.

use tracing::info;

use super::clock::SimulationClock;
use super::error::SimError;
use super::input::ManualInput;
use super::params::Params;
use super::track::Track;
use super::trainer::Trainer;
use super::vector2::Vector2;
use super::vehicle::VehicleState;

/// Who is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A population of network-driven cars evolved by a [`Trainer`].
    Population,
    /// One car driven from [`ManualInput`]. Leaving the track resets it to
    /// the origin instead of killing it.
    Manual,
}

/// What a renderer needs to draw one car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarView {
    /// Position on the course.
    pub position: Vector2,
    /// Heading in radians.
    pub heading: f64,
    /// Whether the car is still being stepped.
    pub alive: bool,
}

enum Driver {
    Population(Trainer),
    Manual(VehicleState),
}

enum TrackState {
    NotLoaded,
    Ready { track: Track, driver: Driver },
}

/// The simulation as seen by the render loop.
pub struct World {
    params: Params,
    mode: Mode,
    state: TrackState,
    clock: SimulationClock,
}

impl World {
    /// Creates a world waiting for its course.
    pub fn new(params: Params, mode: Mode) -> Result<Self, SimError> {
        params.validate()?;
        let clock = SimulationClock::new(params.max_frame_delta);
        Ok(Self {
            params,
            mode,
            state: TrackState::NotLoaded,
            clock,
        })
    }

    /// Installs the course and spawns the cars at its origin.
    pub fn load_track(&mut self, track: Track) -> Result<(), SimError> {
        if self.is_ready() {
            return Err(SimError::TrackAlreadyLoaded);
        }
        let origin = track.origin();
        let driver = self.spawn(origin)?;
        info!(%origin, mode = ?self.mode, "course ready");
        self.state = TrackState::Ready { track, driver };
        Ok(())
    }

    fn spawn(&self, origin: Vector2) -> Result<Driver, SimError> {
        Ok(match self.mode {
            Mode::Population => Driver::Population(Trainer::new(origin, &self.params)?),
            Mode::Manual => Driver::Manual(VehicleState::new(origin)),
        })
    }

    /// Whether the course has been installed.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, TrackState::Ready { .. })
    }

    /// Advances the simulation by `delta` seconds.
    ///
    /// Does nothing before the course is loaded, while paused, or when
    /// `delta` is not positive.
    pub fn tick(&mut self, delta: f64, input: &ManualInput) -> Result<(), SimError> {
        if self.clock.is_paused() || !(delta > 0.0) {
            return Ok(());
        }
        let TrackState::Ready { track, driver } = &mut self.state else {
            return Ok(());
        };

        match driver {
            Driver::Population(trainer) => trainer.tick(delta, track, &self.params)?,
            Driver::Manual(car) => {
                let (forward, turn) = input.controls();
                car.update(forward, turn, delta, &self.params);
                if track.off_track(car.position) {
                    car.reset(track.origin());
                }
            }
        }
        Ok(())
    }

    /// Advances the simulation to the frame timestamp `now` (seconds).
    ///
    /// Frames that carry no elapsed time, such as the first one after
    /// resuming, leave the world untouched.
    pub fn frame(&mut self, now: f64, input: &ManualInput) -> Result<(), SimError> {
        match self.clock.advance(now) {
            Some(delta) => self.tick(delta, input),
            None => Ok(()),
        }
    }

    /// Pauses or resumes. The first frame after resuming does not advance the
    /// world.
    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    /// Whether the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Restarts the current mode: fresh random population, or the manual car
    /// back at the origin.
    pub fn reset(&mut self) -> Result<(), SimError> {
        let origin = match &self.state {
            TrackState::Ready { track, .. } => track.origin(),
            TrackState::NotLoaded => return Ok(()),
        };
        let fresh = self.spawn(origin)?;
        if let TrackState::Ready { driver, .. } = &mut self.state {
            *driver = fresh;
        }
        info!("simulation reset");
        Ok(())
    }

    /// Every car's position and heading, for drawing.
    pub fn cars(&self) -> Vec<CarView> {
        match &self.state {
            TrackState::NotLoaded => Vec::new(),
            TrackState::Ready { driver, .. } => match driver {
                Driver::Population(trainer) => trainer
                    .agents()
                    .iter()
                    .map(|agent| CarView {
                        position: agent.state.position,
                        heading: agent.state.heading,
                        alive: agent.is_alive(),
                    })
                    .collect(),
                Driver::Manual(car) => vec![CarView {
                    position: car.position,
                    heading: car.heading,
                    alive: true,
                }],
            },
        }
    }

    /// The course, once loaded.
    pub fn track(&self) -> Option<&Track> {
        match &self.state {
            TrackState::Ready { track, .. } => Some(track),
            TrackState::NotLoaded => None,
        }
    }

    /// The trainer, in population mode once the course is loaded.
    pub fn trainer(&self) -> Option<&Trainer> {
        match &self.state {
            TrackState::Ready {
                driver: Driver::Population(trainer),
                ..
            } => Some(trainer),
            _ => None,
        }
    }

    /// The manually driven car, in manual mode once the course is loaded.
    pub fn manual_car(&self) -> Option<&VehicleState> {
        match &self.state {
            TrackState::Ready {
                driver: Driver::Manual(car),
                ..
            } => Some(car),
            _ => None,
        }
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Driving mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}
