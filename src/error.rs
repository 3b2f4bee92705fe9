use thiserror::Error;

/// Errors reported by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum NetError {
    /// A vector or matrix operand has the wrong dimension.
    #[error("{op}: shape mismatch (expected {expected}, found {found})")]
    ShapeMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// Layer sizes or parameter arrays do not describe a valid network.
    #[error("invalid network layout: {0}")]
    InvalidLayout(String),

    /// A persisted parameter file is malformed.
    #[error("invalid format: {0}")]
    Format(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A mini-batch selected no training samples.
    #[error("empty mini-batch")]
    EmptyBatch,
}

pub type Result<T> = std::result::Result<T, NetError>;

/// Returns `ShapeMismatch` unless `found == expected`.
pub(crate) fn check_len(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(NetError::ShapeMismatch { op, expected, found })
    }
}
