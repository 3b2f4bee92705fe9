use crate::error::{check_len, Result};

/// A source of `(input, expected output)` pairs addressed by index.
///
/// Implementations must return vectors whose lengths match the input and
/// output layers of the network being trained.
pub trait TrainingSet {
    fn count(&self) -> usize;

    /// Returns sample `index`, with `index < self.count()`.
    fn fetch(&self, index: usize) -> (&[f64], &[f64]);
}

/// Samples held in memory as parallel input and label vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemorySet {
    inputs: Vec<Vec<f64>>,
    labels: Vec<Vec<f64>>,
}

impl InMemorySet {
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<Vec<f64>>) -> Result<InMemorySet> {
        check_len("InMemorySet::new", inputs.len(), labels.len())?;
        Ok(InMemorySet { inputs, labels })
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }
}

impl TrainingSet for InMemorySet {
    fn count(&self) -> usize {
        self.inputs.len()
    }

    fn fetch(&self, index: usize) -> (&[f64], &[f64]) {
        (&self.inputs[index], &self.labels[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unpaired_samples() {
        assert!(InMemorySet::new(vec![vec![1.0], vec![2.0]], vec![vec![1.0]]).is_err());
    }

    #[test]
    fn fetch_returns_matching_pair() {
        let set = InMemorySet::new(
            vec![vec![0.0, 1.0], vec![1.0, 1.0]],
            vec![vec![1.0], vec![0.0]],
        ).unwrap();
        assert_eq!(set.count(), 2);
        assert_eq!(set.fetch(1), (&[1.0, 1.0][..], &[0.0][..]));
    }
}
