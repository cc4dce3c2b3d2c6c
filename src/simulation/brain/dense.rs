//! Dense layer without biases.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

/// Activation applied after a layer's matrix product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// `max(0, x)`, used on hidden layers.
    Relu,
    /// Normalized exponentials, used on the output layer.
    Softmax,
}

/// A single fully connected layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    /// Weight matrix (`input_size` × `output_size`).
    pub weights: Array2<f64>,
    /// Activation applied to the layer output.
    pub activation: Activation,
}

impl Dense {
    /// Creates a layer with all-zero weights.
    pub fn zeros(input_size: usize, output_size: usize, activation: Activation) -> Self {
        Self {
            weights: Array2::zeros((input_size, output_size)),
            activation,
        }
    }

    /// Creates a layer with Glorot-uniform weights.
    pub fn new_random(input_size: usize, output_size: usize, activation: Activation) -> Self {
        let limit = (6.0 / (input_size + output_size) as f64).sqrt();
        Self {
            weights: Array2::random((input_size, output_size), Uniform::new(-limit, limit)),
            activation,
        }
    }

    /// Number of inputs this layer accepts.
    pub fn input_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of outputs this layer produces.
    pub fn output_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Performs the forward pass.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f64>) -> Array1<f64> {
        let mut output = inputs.dot(&self.weights);
        match self.activation {
            Activation::Relu => output.mapv_inplace(|x| x.max(0.0)),
            Activation::Softmax => softmax_inplace(&mut output),
        }
        output
    }
}

/// Max-shifted softmax, so large activations do not overflow.
fn softmax_inplace(values: &mut Array1<f64>) {
    let max = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    values.mapv_inplace(|v| (v - max).exp());
    let sum = values.sum();
    *values /= sum;
}
