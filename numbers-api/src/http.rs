//! HTTP implementation of the numbers service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::{MatrixName, NumbersService, RowFetch};
use crate::error::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL wrapper for type-safe construction.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub String);

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Row payload as served by the remote endpoint.
#[derive(Debug, Deserialize)]
struct RowResponse {
    #[serde(rename = "Value", alias = "value")]
    value: Option<Vec<i64>>,
}

/// Client for the real numbers service over HTTP.
///
/// All requests share one pooled [`Client`] with a per-request timeout.
/// Endpoints follow the service's layout:
///
/// - `GET {base}/api/numbers/init/{size}`
/// - `GET {base}/api/numbers/{matrix}/row/{index}`
/// - `POST {base}/api/numbers/validate`
pub struct HttpNumbersService {
    client: Client,
    base: BaseUrl,
}

impl HttpNumbersService {
    /// Creates a client for the service at `base`.
    ///
    /// # Arguments
    ///
    /// * `base` - Service origin (e.g., `"https://recruitment-test.investcloud.com"`)
    pub fn new(base: impl Into<BaseUrl>) -> Result<Self, Error> {
        let base = base.into();
        let base = BaseUrl(base.0.trim_end_matches('/').to_string());
        Url::parse(&base.0).map_err(|_| Error::InvalidBaseUrl(base.0.clone()))?;

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/numbers/{}", self.base.0, path)
    }
}

#[async_trait]
impl NumbersService for HttpNumbersService {
    async fn initialize(&self, size: usize) -> Result<(), Error> {
        let url = self.endpoint(&format!("init/{size}"));
        debug!(size, "initializing datasets");
        self.client.get(&url).send().await?.error_for_status()?;
        Ok(())
    }

    async fn fetch_row(&self, matrix: MatrixName, index: usize) -> Result<RowFetch, Error> {
        let url = self.endpoint(&format!("{matrix}/row/{index}"));
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<RowResponse>(&body) {
            Ok(RowResponse { value: Some(row) }) => Ok(RowFetch::Row(row)),
            Ok(RowResponse { value: None }) | Err(_) => {
                warn!(%matrix, index, "row response had no usable payload");
                Ok(RowFetch::Failed)
            }
        }
    }

    async fn submit_fingerprint(&self, fingerprint: &str) -> Result<String, Error> {
        let url = self.endpoint("validate");
        debug!(fingerprint, "submitting fingerprint");
        let response = self
            .client
            .post(&url)
            .json(&fingerprint)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
