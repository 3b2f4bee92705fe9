use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::math::ops::{add_matrix_sequences, add_weight_sequences};

/// Per-layer parameter deltas, shaped exactly like a network's weights and
/// biases. The descent direction and step size are already folded in, so a
/// bundle can be added straight onto the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Vec<f64>>,
}

impl Gradients {
    /// Sums two bundles layer by layer.
    pub fn add(&self, other: &Gradients) -> Result<Gradients> {
        Ok(Gradients {
            weights: add_weight_sequences(&self.weights, &other.weights)?,
            biases: add_matrix_sequences(&self.biases, &other.biases)?,
        })
    }

    /// Folds `other` into `acc`, starting a new sum when `acc` is empty.
    pub fn accumulate(acc: Option<Gradients>, other: Gradients) -> Result<Gradients> {
        match acc {
            None => Ok(other),
            Some(sum) => sum.add(&other),
        }
    }
}
