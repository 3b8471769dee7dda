//! Scoring service client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use screening_core::models::scoring::{ScoringRequest, ScoringResponse};

use crate::error::ScoringError;

/// Default endpoint of a locally running scoring service.
pub const DEFAULT_SCORING_URL: &str = "http://localhost:8000/predict";

/// Anything that can turn a completed answer set into an assessment text.
#[async_trait]
pub trait ScoringClient: Send + Sync {
    async fn predict(&self, request: &ScoringRequest) -> Result<ScoringResponse, ScoringError>;
}

/// Posts the request as JSON to the scoring service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    client: reqwest::Client,
    url: String,
}

impl HttpScoringClient {
    /// Build a client for `url`. No timeout is applied unless one is given.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ScoringError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScoringError::Config(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScoringClient for HttpScoringClient {
    async fn predict(&self, request: &ScoringRequest) -> Result<ScoringResponse, ScoringError> {
        debug!(url = %self.url, "posting scoring request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ScoringError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScoringError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ScoringError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ScoringError::MalformedResponse(e.to_string()))
    }
}
