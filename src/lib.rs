//! # Drift Evo - evolving drift-car drivers
//!
//! Cars drive over a raster race track, sense the track edge with ray casts,
//! and are steered by small feed-forward networks. A genetic algorithm
//! evolves the network weights generation over generation: no gradients, only
//! selection, crossover and mutation against distance travelled.
//!
//! ## Features
//!
//! - Drift-capable car physics with direction-dependent friction
//! - Course loading with red-pixel spawn origin and white walls
//! - Marched ray casting against the course raster
//! - Dense networks (relu hidden layers, softmax output)
//! - Elitist genetic algorithm with uniform crossover and uniform mutation
//! - Parallel per-agent updates with rayon
//! - Manual single-car driving mode
//!
//! ## Core Modules
//!
//! - [`simulation::vehicle`] - Car physics
//! - [`simulation::track`] - Course raster and sensing
//! - [`simulation::brain`] - Controller network
//! - [`simulation::trainer`] - Generational training
//! - [`simulation::world`] - Per-frame entry point

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agents and the senses they perceive the course with.
    pub mod agent;
    /// Feed-forward controller network.
    pub mod brain;
    /// Frame delta computation and pause handling.
    pub mod clock;
    /// Error types.
    pub mod error;
    /// Crossover and mutation of weight tensors.
    pub mod genetics;
    /// Keyboard state for manual driving.
    pub mod input;
    /// Simulation parameters.
    pub mod params;
    /// Per-generation fitness history.
    pub mod stats;
    /// Course raster, off-track test and ray casting.
    pub mod track;
    /// Population lifecycle and the genetic algorithm.
    pub mod trainer;
    /// Minimal 2-D vector type.
    pub mod vector2;
    /// Drift-capable vehicle physics.
    pub mod vehicle;
    /// Per-frame driver tying course, cars and clock together.
    pub mod world;
}
