//! Error types for numbers service operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}
