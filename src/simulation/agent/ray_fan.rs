//! Ray fan sense - distance to the track edge in several directions.
//!
//! Rays are marched against the course raster, see [`Track::raycast`].

use ndarray::Array1;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::super::params::Params;
use super::super::track::Track;
use super::super::vector2::Vector2;
use super::super::vehicle::VehicleState;
use super::sense::Sense;

/// Ray angles relative to the heading, left to right.
pub const RAY_ANGLES: [f64; 5] = [FRAC_PI_2, FRAC_PI_4, 0.0, -FRAC_PI_4, -FRAC_PI_2];

/// Five distance rays spread across the front half of the car.
pub struct RayFan {
    angles: Vec<f64>,
}

impl RayFan {
    /// Creates a ray fan with the given relative angles.
    pub fn new(angles: Vec<f64>) -> Self {
        Self { angles }
    }

    /// Casts every ray and returns `(absolute angle, distance)` pairs.
    pub fn cast(&self, state: &VehicleState, track: &Track, params: &Params) -> Vec<(f64, f64)> {
        self.angles
            .iter()
            .map(|offset| {
                let angle = state.heading + offset;
                let distance = track.raycast(
                    state.position,
                    angle,
                    params.ray_max_distance,
                    params.ray_step_size,
                );
                (angle, distance)
            })
            .collect()
    }

    /// End points of every ray, for drawing.
    pub fn endpoints(&self, state: &VehicleState, track: &Track, params: &Params) -> Vec<Vector2> {
        self.cast(state, track, params)
            .into_iter()
            .map(|(angle, distance)| state.position + Vector2::from_angle(angle) * distance)
            .collect()
    }
}

impl Default for RayFan {
    fn default() -> Self {
        Self::new(RAY_ANGLES.to_vec())
    }
}

impl Sense for RayFan {
    fn sense(&self, state: &VehicleState, track: &Track, params: &Params) -> Array1<f64> {
        self.cast(state, track, params)
            .into_iter()
            .map(|(_, distance)| distance)
            .collect()
    }

    fn input_size(&self) -> usize {
        self.angles.len()
    }

    fn name(&self) -> &'static str {
        "RayFan"
    }

    fn ray_endpoints(&self, state: &VehicleState, track: &Track, params: &Params) -> Vec<Vector2> {
        self.endpoints(state, track, params)
    }
}
