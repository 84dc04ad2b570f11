//! Service trait and row-fetch result types.

use std::fmt;

use async_trait::async_trait;

use crate::error::Error;

/// Name of a fetchable input matrix on the remote service.
///
/// The service hosts exactly two datasets per initialization, so the name
/// space is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixName {
    A,
    B,
}

impl MatrixName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixName::A => "A",
            MatrixName::B => "B",
        }
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single row fetch.
///
/// The service answers every reachable request with *something*; a body that
/// cannot be decoded into a row is reported as `Failed` rather than an error,
/// so the assembler can tell a broken dataset apart from a broken connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFetch {
    /// The decoded row, in the column order the service returned.
    Row(Vec<i64>),
    /// The response carried no usable payload.
    Failed,
}

/// The remote numbers service.
///
/// One implementation talks HTTP ([`crate::HttpNumbersService`]); tests
/// substitute doubles with canned responses.
#[async_trait]
pub trait NumbersService: Send + Sync {
    /// Prepares datasets of the given size. Must complete before any fetch.
    async fn initialize(&self, size: usize) -> Result<(), Error>;

    /// Fetches row `index` of the named matrix. One request, no retry.
    async fn fetch_row(&self, matrix: MatrixName, index: usize) -> Result<RowFetch, Error>;

    /// Submits the fingerprint for validation and returns the response body.
    async fn submit_fingerprint(&self, fingerprint: &str) -> Result<String, Error>;
}
