//! Transport seam for the prediction endpoint and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{PredictionRequest, PredictionResult};
use tracing::debug;
use url::Url;

use crate::error::PredictionError;

pub const DEFAULT_PREDICTION_ENDPOINT: &str = "https://energeneous.xyz:8000/predict";

#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError>;
}

pub fn parse_endpoint(raw: &str) -> Result<Url, PredictionError> {
    let endpoint = Url::parse(raw.trim()).map_err(|source| PredictionError::InvalidEndpoint {
        endpoint: raw.to_string(),
        source,
    })?;
    match endpoint.scheme() {
        "http" | "https" => Ok(endpoint),
        _ => Err(PredictionError::UnsupportedScheme {
            endpoint: raw.to_string(),
        }),
    }
}

/// POSTs the parameters as JSON. No auth, no retries; a timeout is applied
/// only when one is configured.
#[derive(Debug, Clone)]
pub struct HttpPredictionTransport {
    http: Client,
    endpoint: Url,
}

impl HttpPredictionTransport {
    pub fn new(endpoint: &str) -> Result<Self, PredictionError> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(endpoint: &str, timeout: Option<Duration>) -> Result<Self, PredictionError> {
        let endpoint = parse_endpoint(endpoint)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionTransport for HttpPredictionTransport {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        debug!(endpoint = %self.endpoint, "posting prediction request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(PredictionError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
