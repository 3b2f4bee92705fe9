pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod backprop;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use backprop::{ForwardPass, Gradients};
pub use optim::sgd::Sgd;
pub use train::{train_loop, sgd_batch, Evaluation, InMemorySet, TrainConfig, TrainingSet};
