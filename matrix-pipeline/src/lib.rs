//! Concurrent fetch-and-multiply pipeline.
//!
//! `matrix-pipeline` retrieves two square integer matrices row-by-row from the
//! numbers service, multiplies them in parallel, and submits a fingerprint of
//! the product for remote verification. The service is injected through the
//! [`numbers_api::NumbersService`] trait, so the whole pipeline runs unchanged
//! against an in-process double.
//!
//! # Stages
//!
//! 1. Initialize the remote datasets for the requested size.
//! 2. Fetch matrices A and B concurrently, each fanning out one request per
//!    row; assembly is index-deterministic regardless of completion order.
//! 3. Abort if either matrix came back incomplete.
//! 4. Compute C = A × B with result rows partitioned across the rayon pool.
//! 5. Serialize C to its canonical string, fingerprint it (MD5, base64), and
//!    submit.
//!
//! # Example
//!
//! ```no_run
//! use matrix_pipeline::{Pipeline, RunOutcome};
//! use numbers_api::HttpNumbersService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpNumbersService::new("https://recruitment-test.investcloud.com")?;
//!     let pipeline = Pipeline::new(service);
//!
//!     match pipeline.run(1000).await? {
//!         RunOutcome::Completed(report) => println!("{}", report.response),
//!         RunOutcome::Aborted { matrix, .. } => println!("matrix {matrix} is invalid"),
//!     }
//!     Ok(())
//! }
//! ```

mod assemble;
mod encode;
mod error;
mod fingerprint;
mod matrix;
mod multiply;
mod pipeline;

pub use assemble::{MatrixFetch, fetch_matrix};
pub use encode::canonical_string;
pub use error::Error;
pub use fingerprint::fingerprint;
pub use matrix::Matrix;
pub use multiply::multiply_parallel;
pub use pipeline::{Pipeline, RunOutcome, RunReport};
