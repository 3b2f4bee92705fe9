pub mod sigmoid;

pub use sigmoid::{sigmoid, sigmoid_derivative, sigmoid_derivative_vec, sigmoid_vec};
