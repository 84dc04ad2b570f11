//! Error types for pipeline operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("numbers service error: {0}")]
    Service(#[from] numbers_api::Error),

    #[error("matrix dimension mismatch: left is {0}x{0}, right is {1}x{1}")]
    DimensionMismatch(usize, usize),

    #[error("matrix size must be at least 1")]
    SizeZero,

    #[error("multiplier task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
