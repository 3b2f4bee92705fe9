use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::activation::sigmoid_vec;
use crate::error::{check_len, NetError, Result};
use crate::math::matrix::Matrix;
use crate::math::ops::{add, mat_vec};

/// A fully-connected sigmoid network.
///
/// `weights[i]` is `sizes[i + 1] x sizes[i]` and `biases[i]` has
/// `sizes[i + 1]` entries. The layout is fixed at construction; training only
/// rewrites parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    sizes: Vec<usize>,
    weights: Vec<Matrix>,
    biases: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with all weights and biases set to zero.
    ///
    /// `sizes` lists the width of every layer, input first. At least two
    /// layers are required and none may be empty.
    pub fn new(sizes: &[usize]) -> Result<Network> {
        validate_sizes(sizes)?;

        let weights = sizes.windows(2)
            .map(|pair| Matrix::zeros(pair[1], pair[0]))
            .collect();
        let biases = sizes[1..].iter()
            .map(|&n| vec![0.0; n])
            .collect();

        Ok(Network {
            sizes: sizes.to_vec(),
            weights,
            biases,
        })
    }

    /// Builds a network from explicit parameters, checking every shape
    /// against `sizes`.
    pub fn from_parameters(
        sizes: Vec<usize>,
        weights: Vec<Matrix>,
        biases: Vec<Vec<f64>>,
    ) -> Result<Network> {
        let net = Network { sizes, weights, biases };
        net.validate()?;
        Ok(net)
    }

    /// Replaces every weight and bias with an independent standard-normal
    /// sample drawn from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for w in &mut self.weights {
            w.fill_standard_normal(rng);
        }
        for b in &mut self.biases {
            for x in b.iter_mut() {
                *x = rng.sample(rand_distr::StandardNormal);
            }
        }
    }

    /// Output of the network for `input`: `a <- σ(W·a + b)` for every layer.
    pub fn feed_forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        check_len("feed_forward", self.sizes[0], input.len())?;

        let mut a = input.to_vec();
        for (w, b) in self.weights.iter().zip(&self.biases) {
            a = sigmoid_vec(&add(&mat_vec(w, &a)?, b)?);
        }
        Ok(a)
    }

    /// Number of layers including the input layer.
    pub fn layer_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.sizes.windows(2).map(|p| p[1] * p[0] + p[1]).sum()
    }

    /// Replaces all parameters at once. The new arrays must have exactly the
    /// current shapes.
    pub(crate) fn set_parameters(&mut self, weights: Vec<Matrix>, biases: Vec<Vec<f64>>) -> Result<()> {
        let candidate = Network {
            sizes: self.sizes.clone(),
            weights,
            biases,
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        validate_sizes(&self.sizes)?;
        let layers = self.sizes.len() - 1;
        if self.weights.len() != layers || self.biases.len() != layers {
            return Err(NetError::InvalidLayout(format!(
                "{} layer sizes need {} weight matrices and bias vectors, found {} and {}",
                self.sizes.len(),
                layers,
                self.weights.len(),
                self.biases.len()
            )));
        }
        for (i, pair) in self.sizes.windows(2).enumerate() {
            self.weights[i].check_shape(pair[1], pair[0])?;
            if self.biases[i].len() != pair[1] {
                return Err(NetError::InvalidLayout(format!(
                    "bias vector {} should have {} entries, found {}",
                    i,
                    pair[1],
                    self.biases[i].len()
                )));
            }
        }
        Ok(())
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        debug!(path, sizes = ?self.sizes, "saved network as json");
        Ok(())
    }

    /// Reads a network previously written by `save_json`, rejecting files
    /// whose parameter shapes disagree with their layer sizes.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let net: Network = serde_json::from_reader(reader)?;
        net.validate()?;
        debug!(path, sizes = ?net.sizes, "loaded network from json");
        Ok(net)
    }
}

pub(crate) fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(NetError::InvalidLayout(format!(
            "at least 2 layers are required, found {}",
            sizes.len()
        )));
    }
    if let Some(i) = sizes.iter().position(|&n| n == 0) {
        return Err(NetError::InvalidLayout(format!("layer {} has no neurons", i)));
    }
    Ok(())
}
