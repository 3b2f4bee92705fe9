pub mod dataset;
pub mod epoch_stats;
pub mod evaluate;
pub mod loop_fn;
pub mod train_config;

pub use dataset::{InMemorySet, TrainingSet};
pub use epoch_stats::EpochStats;
pub use evaluate::{argmax_matches, mean_squared_error, threshold_matches};
pub use loop_fn::{sgd_batch, train_loop, Evaluation, EvaluateFn};
pub use train_config::TrainConfig;
