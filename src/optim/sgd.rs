use crate::backprop::gradients::Gradients;
use crate::error::Result;
use crate::math::ops::{add_matrix_sequences, add_weight_sequences};
use crate::network::network::Network;

/// Plain stochastic gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Per-sample step for a batch of `batch_len` samples, so that summing the
    /// batch's deltas applies the averaged gradient.
    pub fn step_rate(&self, batch_len: usize) -> f64 {
        self.learning_rate / batch_len as f64
    }

    /// Adds accumulated deltas onto the network's parameters.
    pub fn step(&self, network: &mut Network, gradients: &Gradients) -> Result<()> {
        let weights = add_weight_sequences(network.weights(), &gradients.weights)?;
        let biases = add_matrix_sequences(network.biases(), &gradients.biases)?;
        network.set_parameters(weights, biases)
    }
}
