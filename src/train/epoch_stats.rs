use serde::{Serialize, Deserialize};

/// Per-epoch progress emitted by `train_loop`.
///
/// One value is returned for every completed epoch and, when a
/// `progress_tx` channel is configured in `TrainConfig`, sent through it as
/// the epoch finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mini-batches applied during this epoch.
    pub batches: usize,
    /// Test samples the evaluation callback judged correct, if a test set was supplied.
    pub correct: Option<usize>,
    /// Size of the test set, if one was supplied.
    pub test_count: Option<usize>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
