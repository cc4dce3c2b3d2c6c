//! Genetic operators on detached weight tensors.
//!
//! Children are assembled from owned copies of their parents' tensors and
//! installed into a freshly built controller.

use ndarray::{Array2, Zip};
use rand::Rng;

use super::brain::Controller;
use super::error::SimError;

/// Uniform crossover: each element comes from `parent1` or `parent2` with
/// equal probability.
///
/// Fails if the parents have different shapes.
pub fn crossover<R: Rng>(
    parent1: &Array2<f64>,
    parent2: &Array2<f64>,
    rng: &mut R,
) -> Result<Array2<f64>, SimError> {
    if parent1.dim() != parent2.dim() {
        return Err(SimError::ParentShapes {
            left: parent1.dim(),
            right: parent2.dim(),
        });
    }
    let mut child = parent1.clone();
    Zip::from(&mut child).and(parent2).for_each(|gene, &other| {
        if rng.random_bool(0.5) {
            *gene = other;
        }
    });
    Ok(child)
}

/// Adds `U[-max, max]` noise to each element independently with
/// probability `chance`.
pub fn mutate<R: Rng>(weights: &mut Array2<f64>, chance: f64, max: f64, rng: &mut R) {
    for gene in weights.iter_mut() {
        if rng.random_bool(chance) {
            *gene += if max > 0.0 {
                rng.random_range(-max..=max)
            } else {
                0.0
            };
        }
    }
}

/// Builds a child controller from two parents: crossover, then mutation,
/// tensor by tensor.
///
/// Parents must share a topology.
pub fn breed<R: Rng>(
    parent1: &Controller,
    parent2: &Controller,
    mutation_chance: f64,
    mutation_max: f64,
    rng: &mut R,
) -> Result<Controller, SimError> {
    let (weights1, weights2) = (parent1.weights(), parent2.weights());
    if weights1.len() != weights2.len() {
        return Err(SimError::LayerCount {
            expected: weights1.len(),
            actual: weights2.len(),
        });
    }
    let weights = weights1
        .iter()
        .zip(&weights2)
        .map(|(w1, w2)| {
            let mut child = crossover(w1, w2, rng)?;
            mutate(&mut child, mutation_chance, mutation_max, rng);
            Ok(child)
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    let mut child = Controller::zeroed(&parent1.hidden_layers());
    child.set_weights(weights)?;
    Ok(child)
}
