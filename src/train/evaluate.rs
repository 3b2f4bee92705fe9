use crate::error::Result;
use crate::network::network::Network;
use crate::train::dataset::TrainingSet;

/// Counts samples whose largest output sits at the same index as the largest
/// label entry (one-hot classification).
pub fn argmax_matches(network: &Network, set: &dyn TrainingSet) -> Result<usize> {
    let mut correct = 0;
    for i in 0..set.count() {
        let (input, label) = set.fetch(i);
        let output = network.feed_forward(input)?;
        if argmax(&output) == argmax(label) {
            correct += 1;
        }
    }
    Ok(correct)
}

/// Returns an evaluator counting samples whose every output lies within
/// `tolerance` of the label.
pub fn threshold_matches(tolerance: f64) -> impl Fn(&Network, &dyn TrainingSet) -> Result<usize> {
    move |network: &Network, set: &dyn TrainingSet| {
        let mut correct = 0;
        for i in 0..set.count() {
            let (input, label) = set.fetch(i);
            let output = network.feed_forward(input)?;
            if output.iter().zip(label).all(|(o, l)| (o - l).abs() <= tolerance) {
                correct += 1;
            }
        }
        Ok(correct)
    }
}

/// Quadratic cost `1/2n · Σ ||a - y||²` over the whole set; 0 for an empty set.
pub fn mean_squared_error(network: &Network, set: &dyn TrainingSet) -> Result<f64> {
    let n = set.count();
    if n == 0 {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for i in 0..n {
        let (input, label) = set.fetch(i);
        let output = network.feed_forward(input)?;
        total += output.iter().zip(label).map(|(o, l)| (o - l).powi(2)).sum::<f64>();
    }
    Ok(total / (2.0 * n as f64))
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
