use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::backprop::gradients::Gradients;
use crate::error::{NetError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::dataset::TrainingSet;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Signature of an evaluation callback: returns how many samples of the set
/// the network gets right. What counts as right is up to the caller.
pub type EvaluateFn<'a> = dyn Fn(&Network, &dyn TrainingSet) -> Result<usize> + 'a;

/// A test set paired with the callback that scores the network on it after
/// every epoch.
pub struct Evaluation<'a> {
    pub test_set: &'a dyn TrainingSet,
    pub evaluate: &'a EvaluateFn<'a>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` with mini-batch SGD for `config.epochs` epochs.
///
/// Each epoch draws a fresh permutation of the training indices from `rng`,
/// cuts it into consecutive batches of `config.batch_size` and applies one
/// update per batch, in order. When the set size is not a multiple of the
/// batch size the trailing partial batch is skipped for that epoch.
///
/// # Errors
/// - `EmptyBatch` if `batch_size` is zero or larger than the training set,
///   since no full batch could ever be formed.
/// - `ShapeMismatch` if a sample does not fit the network.
///
/// # Early termination
/// The loop breaks after the current epoch if the `progress_tx` receiver has
/// been dropped or `config.stop_flag` is set.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    training: &dyn TrainingSet,
    evaluation: Option<&Evaluation<'_>>,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    let n = training.count();
    if config.batch_size == 0 || config.batch_size > n {
        return Err(NetError::EmptyBatch);
    }

    let mut history = Vec::with_capacity(config.epochs);
    let mut indices: Vec<usize> = (0..n).collect();

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            break;
        }

        let t_start = Instant::now();

        indices.shuffle(rng);
        let mut batches = 0;
        for batch in indices.chunks_exact(config.batch_size) {
            sgd_batch(network, training, batch, optimizer)?;
            batches += 1;
        }

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!(epoch, batches, dropped = n % config.batch_size, elapsed_ms, "epoch finished");

        let (correct, test_count) = match evaluation {
            Some(eval) => {
                let correct = (eval.evaluate)(&*network, eval.test_set)?;
                let total = eval.test_set.count();
                info!("Epoch {}: {}/{}", epoch, correct, total);
                (Some(correct), Some(total))
            }
            None => (None, None),
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            batches,
            correct,
            test_count,
            elapsed_ms,
        };
        history.push(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    Ok(history)
}

/// Applies one SGD update computed from the samples at `batch`.
///
/// Every sample's deltas use the learning rate divided by the batch length,
/// so their sum is the averaged gradient step.
pub fn sgd_batch(
    network: &mut Network,
    training: &dyn TrainingSet,
    batch: &[usize],
    optimizer: &Sgd,
) -> Result<()> {
    if batch.is_empty() {
        return Err(NetError::EmptyBatch);
    }

    let step_rate = optimizer.step_rate(batch.len());
    let mut acc: Option<Gradients> = None;
    for &idx in batch {
        let (input, expected) = training.fetch(idx);
        let grads = network.compute_gradients(input, expected, step_rate)?;
        acc = Some(Gradients::accumulate(acc, grads)?);
    }

    match acc {
        Some(grads) => optimizer.step(network, &grads),
        None => Err(NetError::EmptyBatch),
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}
