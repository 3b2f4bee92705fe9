use crate::activation::{sigmoid_derivative_vec, sigmoid_vec};
use crate::backprop::gradients::Gradients;
use crate::error::{check_len, Result};
use crate::math::ops::{add, hadamard, mat_vec, mat_vec_transposed, outer, scale, sub};
use crate::network::network::Network;

/// Intermediate values of one forward pass, kept for the backward pass.
///
/// `activations` has one entry per layer (input included); `weighted` has
/// one entry per weighted layer, `weighted[i] = W[i]·activations[i] + b[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    pub activations: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
}

impl Network {
    /// Parameter deltas for one `(input, expected)` pair.
    ///
    /// `step_rate` is the learning rate already divided by the batch length.
    pub fn compute_gradients(&self, input: &[f64], expected: &[f64], step_rate: f64) -> Result<Gradients> {
        check_len("compute_gradients", self.output_size(), expected.len())?;
        let pass = self.forward_pass(input)?;
        let errors = self.compute_errors(&pass, expected)?;
        self.compute_deltas(&errors, &pass.activations, step_rate)
    }

    /// Runs the network on `input`, recording every activation and weighted
    /// input on the way.
    pub fn forward_pass(&self, input: &[f64]) -> Result<ForwardPass> {
        check_len("forward_pass", self.input_size(), input.len())?;

        let layers = self.weights().len();
        let mut activations = Vec::with_capacity(layers + 1);
        let mut weighted = Vec::with_capacity(layers);
        activations.push(input.to_vec());

        for (i, (w, b)) in self.weights().iter().zip(self.biases()).enumerate() {
            let z = add(&mat_vec(w, &activations[i])?, b)?;
            activations.push(sigmoid_vec(&z));
            weighted.push(z);
        }

        Ok(ForwardPass { activations, weighted })
    }

    /// Error terms `δ` (gradient of the quadratic cost with respect to each
    /// layer's weighted input), indexed like `weighted`.
    pub fn compute_errors(&self, pass: &ForwardPass, expected: &[f64]) -> Result<Vec<Vec<f64>>> {
        let n = self.weights().len();
        check_len("compute_errors", n + 1, pass.activations.len())?;
        check_len("compute_errors", n, pass.weighted.len())?;

        let mut deltas = vec![Vec::new(); n];
        deltas[n - 1] = hadamard(
            &sub(&pass.activations[n], expected)?,
            &sigmoid_derivative_vec(&pass.weighted[n - 1]),
        )?;

        for i in (0..n - 1).rev() {
            deltas[i] = hadamard(
                &mat_vec_transposed(&self.weights()[i + 1], &deltas[i + 1])?,
                &sigmoid_derivative_vec(&pass.weighted[i]),
            )?;
        }

        Ok(deltas)
    }

    /// Turns error terms into descent-direction deltas:
    /// `ΔW[i] = (-rate·δ[i])·a[i]ᵗ` and `Δb[i] = -rate·δ[i]`.
    pub fn compute_deltas(&self, deltas: &[Vec<f64>], activations: &[Vec<f64>], step_rate: f64) -> Result<Gradients> {
        let n = self.weights().len();
        check_len("compute_deltas", n, deltas.len())?;
        check_len("compute_deltas", n + 1, activations.len())?;

        let mut weights = Vec::with_capacity(n);
        let mut biases = Vec::with_capacity(n);
        for (delta, a) in deltas.iter().zip(activations) {
            let step = scale(-step_rate, delta);
            weights.push(outer(&step, a));
            biases.push(step);
        }

        Ok(Gradients { weights, biases })
    }
}
