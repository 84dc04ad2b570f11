//! Pipeline orchestration.

use std::time::{Duration, Instant};

use numbers_api::{MatrixName, NumbersService};
use tokio::task;
use tracing::{info, warn};

use crate::assemble::{self, MatrixFetch};
use crate::encode;
use crate::error::Error;
use crate::fingerprint;
use crate::multiply;

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// The submitted fingerprint.
    pub fingerprint: String,
    /// Validation response body, reported but never acted on.
    pub response: String,
    /// Wall clock from just after initialization to just after submission.
    pub elapsed: Duration,
}

/// Terminal state of one pipeline run.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunReport),
    /// A fetched matrix was incomplete; nothing was multiplied or submitted.
    Aborted {
        matrix: MatrixName,
        failed_rows: usize,
    },
}

/// Sequences initialize → fetch → multiply → fingerprint → submit against an
/// injected [`NumbersService`].
pub struct Pipeline<S> {
    service: S,
    max_in_flight: Option<usize>,
}

impl<S: NumbersService> Pipeline<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            max_in_flight: None,
        }
    }

    /// Bounds per-matrix fetch concurrency. Unbounded by default.
    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.max_in_flight = Some(limit);
        self
    }

    /// Runs the pipeline for `size` × `size` matrices.
    ///
    /// A and B are fetched concurrently, each fanning out one request per
    /// row. An incomplete matrix short-circuits to [`RunOutcome::Aborted`]
    /// before any multiplication or submission; transport failures propagate
    /// as errors.
    pub async fn run(&self, size: usize) -> Result<RunOutcome, Error> {
        if size == 0 {
            return Err(Error::SizeZero);
        }

        self.service.initialize(size).await?;
        let started = Instant::now();

        let (a, b) = tokio::join!(
            assemble::fetch_matrix(&self.service, MatrixName::A, size, self.max_in_flight),
            assemble::fetch_matrix(&self.service, MatrixName::B, size, self.max_in_flight),
        );
        let a = match a? {
            MatrixFetch::Complete(matrix) => matrix,
            MatrixFetch::Incomplete { failed_rows } => {
                warn!(matrix = %MatrixName::A, failed_rows, "aborting run");
                return Ok(RunOutcome::Aborted {
                    matrix: MatrixName::A,
                    failed_rows,
                });
            }
        };
        let b = match b? {
            MatrixFetch::Complete(matrix) => matrix,
            MatrixFetch::Incomplete { failed_rows } => {
                warn!(matrix = %MatrixName::B, failed_rows, "aborting run");
                return Ok(RunOutcome::Aborted {
                    matrix: MatrixName::B,
                    failed_rows,
                });
            }
        };

        // CPU-bound kernel runs off the async workers.
        let product = task::spawn_blocking(move || multiply::multiply_parallel(&a, &b)).await??;
        info!(size, "computed product");

        let canonical = encode::canonical_string(&product);
        let fingerprint = fingerprint::fingerprint(&canonical);
        let response = self.service.submit_fingerprint(&fingerprint).await?;
        let elapsed = started.elapsed();

        info!(?elapsed, "run complete");
        Ok(RunOutcome::Completed(RunReport {
            fingerprint,
            response,
            elapsed,
        }))
    }
}
