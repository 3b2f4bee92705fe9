pub mod engine;
pub mod gradients;

pub use engine::ForwardPass;
pub use gradients::Gradients;
