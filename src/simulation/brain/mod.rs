//! Feed-forward controller that maps sensor readings to driving controls.
//!
//! The controller is an ordered stack of [`Dense`] layers: `relu` on every
//! hidden layer and `softmax` on the output. Its weight tensors are the whole
//! genome of an agent; they leave and enter the controller only as owned
//! copies, so parents and children never share storage.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::error::SimError;

pub mod dense;

pub use dense::{Activation, Dense};

/// Number of sensor inputs.
pub const INPUT_SIZE: usize = 7;
/// Number of control outputs (throttle, steering).
pub const OUTPUT_SIZE: usize = 2;

/// Neural network that drives one car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller {
    /// Ordered layers from input to output.
    layers: Vec<Dense>,
}

impl Controller {
    /// Creates a controller with all-zero weights.
    pub fn zeroed(hidden_layers: &[usize]) -> Self {
        Self::build(hidden_layers, Dense::zeros)
    }

    /// Creates a controller with variance-scaled random weights.
    pub fn new_random(hidden_layers: &[usize]) -> Self {
        Self::build(hidden_layers, Dense::new_random)
    }

    fn build(
        hidden_layers: &[usize],
        make_layer: impl Fn(usize, usize, Activation) -> Dense,
    ) -> Self {
        let mut layers = Vec::with_capacity(hidden_layers.len() + 1);
        let mut input_size = INPUT_SIZE;
        for &width in hidden_layers {
            layers.push(make_layer(input_size, width, Activation::Relu));
            input_size = width;
        }
        layers.push(make_layer(input_size, OUTPUT_SIZE, Activation::Softmax));
        Self { layers }
    }

    /// Layer widths from input to output, e.g. `[7, 8, 2]`.
    pub fn topology(&self) -> Vec<usize> {
        std::iter::once(INPUT_SIZE)
            .chain(self.layers.iter().map(Dense::output_size))
            .collect()
    }

    /// Runs a forward pass. The two outputs sum to 1.
    pub fn infer(&self, sensors: &[f64; INPUT_SIZE]) -> [f64; OUTPUT_SIZE] {
        let mut output = Array1::from_iter(sensors.iter().copied());
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        [output[0], output[1]]
    }

    /// Runs a forward pass and maps the outputs to `(forward, turn)` in `[-1, 1]`.
    pub fn controls(&self, sensors: &[f64; INPUT_SIZE]) -> (f64, f64) {
        let [throttle, steering] = self.infer(sensors);
        (throttle * 2.0 - 1.0, steering * 2.0 - 1.0)
    }

    /// Owned copies of every layer's weight tensor, input layer first.
    pub fn weights(&self) -> Vec<Array2<f64>> {
        self.layers.iter().map(|l| l.weights.clone()).collect()
    }

    /// Replaces every weight tensor at once.
    ///
    /// Fails without modifying the controller if the count or any shape
    /// differs from the current topology.
    pub fn set_weights(&mut self, weights: Vec<Array2<f64>>) -> Result<(), SimError> {
        if weights.len() != self.layers.len() {
            return Err(SimError::LayerCount {
                expected: self.layers.len(),
                actual: weights.len(),
            });
        }
        for (index, (layer, tensor)) in self.layers.iter().zip(&weights).enumerate() {
            if layer.weights.dim() != tensor.dim() {
                return Err(SimError::WeightShape {
                    index,
                    expected: layer.weights.dim(),
                    actual: tensor.dim(),
                });
            }
        }
        for (layer, tensor) in self.layers.iter_mut().zip(weights) {
            layer.weights = tensor;
        }
        Ok(())
    }

    /// Hidden layer widths, i.e. the argument this controller was built with.
    pub fn hidden_layers(&self) -> Vec<usize> {
        self.layers[..self.layers.len() - 1]
            .iter()
            .map(Dense::output_size)
            .collect()
    }
}
