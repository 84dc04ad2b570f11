//! Async client for the remote numbers service.
//!
//! `numbers-api` wraps the three operations the service exposes (dataset
//! initialization, per-row matrix fetch, fingerprint validation) behind the
//! [`NumbersService`] trait so that the pipeline can run against either the
//! real HTTP endpoint or an in-process test double.
//!
//! # Fail-soft rows
//!
//! A row fetch distinguishes transport failures from unusable payloads. A
//! connection error or non-success status is a hard [`Error`]; an empty or
//! malformed body degrades to [`RowFetch::Failed`], which the caller detects
//! when validating the assembled matrix.
//!
//! # Example
//!
//! ```no_run
//! use numbers_api::{HttpNumbersService, MatrixName, NumbersService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpNumbersService::new("https://recruitment-test.investcloud.com")?;
//!
//!     service.initialize(2).await?;
//!     let row = service.fetch_row(MatrixName::A, 0).await?;
//!     println!("{:?}", row);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;

pub use client::{MatrixName, NumbersService, RowFetch};
pub use error::Error;
pub use http::{BaseUrl, HttpNumbersService};
