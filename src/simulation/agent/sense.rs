//! Abstract sense trait for agent perception.
//!
//! Senses turn the agent's state and the track into controller inputs.

use ndarray::Array1;

use super::super::params::Params;
use super::super::track::Track;
use super::super::vector2::Vector2;
use super::super::vehicle::VehicleState;

/// A sensory modality that contributes a fixed number of controller inputs.
///
/// Senses only read shared state, so agents can be stepped in parallel.
pub trait Sense: Sync {
    /// Reads the environment and returns this sense's activations.
    ///
    /// # Arguments
    ///
    /// * `state` - Physical state of the sensing car
    /// * `track` - The course being driven
    /// * `params` - Simulation parameters
    fn sense(&self, state: &VehicleState, track: &Track, params: &Params) -> Array1<f64>;

    /// Returns the number of inputs this sense produces.
    fn input_size(&self) -> usize;

    /// Returns a human-readable name for this sense.
    fn name(&self) -> &'static str;

    /// World-space end points of any rays this sense casts, for drawing.
    fn ray_endpoints(&self, _state: &VehicleState, _track: &Track, _params: &Params) -> Vec<Vector2> {
        Vec::new()
    }
}
