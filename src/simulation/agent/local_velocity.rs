//! Local velocity sense - the car's motion in its own frame.

use ndarray::{Array1, array};

use super::super::params::Params;
use super::super::track::Track;
use super::super::vehicle::VehicleState;
use super::sense::Sense;

/// Velocity projected onto the heading axis and its perpendicular.
///
/// Outputs:
/// - Forward speed (positive when moving the way the wheels point)
/// - Sideways speed (positive towards the heading rotated by +90°)
pub struct LocalVelocity;

impl LocalVelocity {
    /// Creates a new local velocity sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalVelocity {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for LocalVelocity {
    fn sense(&self, state: &VehicleState, _track: &Track, _params: &Params) -> Array1<f64> {
        let (along, across) = state.local_velocity();
        array![along, across]
    }

    fn input_size(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "LocalVelocity"
    }
}
