//! Perception system that combines senses into controller inputs.

use super::super::brain::INPUT_SIZE;
use super::super::error::SimError;
use super::super::params::Params;
use super::super::track::Track;
use super::super::vector2::Vector2;
use super::super::vehicle::VehicleState;
use super::local_velocity::LocalVelocity;
use super::ray_fan::RayFan;
use super::sense::Sense;

/// Ordered list of senses whose outputs are concatenated into the
/// controller's input vector.
pub struct Perception {
    senses: Vec<Box<dyn Sense>>,
}

impl Perception {
    /// Creates a perception system that queries `senses` in order.
    ///
    /// Fails unless the senses add up to exactly [`INPUT_SIZE`] inputs.
    pub fn new(senses: Vec<Box<dyn Sense>>) -> Result<Self, SimError> {
        let actual: usize = senses.iter().map(|s| s.input_size()).sum();
        if actual != INPUT_SIZE {
            return Err(SimError::SenseWidth {
                expected: INPUT_SIZE,
                actual,
            });
        }
        Ok(Self { senses })
    }

    /// Queries every sense and concatenates the results.
    pub fn perceive(
        &self,
        state: &VehicleState,
        track: &Track,
        params: &Params,
    ) -> [f64; INPUT_SIZE] {
        let mut inputs = [0.0; INPUT_SIZE];
        let mut offset = 0;
        for sense in &self.senses {
            let outputs = sense.sense(state, track, params);
            let size = sense.input_size();
            for (slot, &value) in inputs[offset..offset + size].iter_mut().zip(outputs.iter()) {
                *slot = value;
            }
            offset += size;
        }
        inputs
    }

    /// Returns the senses in query order.
    pub fn senses(&self) -> &[Box<dyn Sense>] {
        &self.senses
    }

    /// End points of every ray cast by any sense.
    pub fn ray_endpoints(
        &self,
        state: &VehicleState,
        track: &Track,
        params: &Params,
    ) -> Vec<Vector2> {
        self.senses
            .iter()
            .flat_map(|sense| sense.ray_endpoints(state, track, params))
            .collect()
    }
}

impl Default for Perception {
    /// Local velocity followed by the five-ray fan.
    fn default() -> Self {
        // 2 + 5 inputs
        Self {
            senses: vec![Box::new(LocalVelocity::new()), Box::new(RayFan::default())],
        }
    }
}
