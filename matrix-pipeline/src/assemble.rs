//! Concurrent row fetch and matrix assembly.

use futures_util::{StreamExt, stream};
use numbers_api::{MatrixName, NumbersService, RowFetch};
use tracing::{info, warn};

use crate::error::Error;
use crate::matrix::Matrix;

/// Outcome of assembling one matrix from row fetches.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixFetch {
    /// Every row arrived with the expected length.
    Complete(Matrix<i64>),
    /// One or more rows failed soft or had the wrong length.
    Incomplete { failed_rows: usize },
}

/// Fetches the named `size` × `size` matrix one row per request.
///
/// Up to `max_in_flight` requests run concurrently (all of them when `None`).
/// All fetches complete before the result is inspected, and rows land at
/// their requested index no matter which request finishes first. A row that
/// failed soft, or whose length is not `size`, marks the matrix incomplete
/// without disturbing its siblings.
pub async fn fetch_matrix<S>(
    service: &S,
    name: MatrixName,
    size: usize,
    max_in_flight: Option<usize>,
) -> Result<MatrixFetch, Error>
where
    S: NumbersService + ?Sized,
{
    let limit = max_in_flight.unwrap_or(size).max(1);
    let results: Vec<_> = stream::iter((0..size).map(|index| service.fetch_row(name, index)))
        .buffered(limit)
        .collect()
        .await;

    let mut cells = Vec::with_capacity(size * size);
    let mut failed_rows = 0;
    for result in results {
        match result? {
            RowFetch::Row(row) if row.len() == size => cells.extend(row),
            RowFetch::Row(_) | RowFetch::Failed => failed_rows += 1,
        }
    }

    if failed_rows > 0 {
        warn!(%name, failed_rows, "assembled matrix is incomplete");
        return Ok(MatrixFetch::Incomplete { failed_rows });
    }

    info!(%name, size, "assembled matrix");
    Ok(MatrixFetch::Complete(Matrix::from_cells(size, cells)))
}
