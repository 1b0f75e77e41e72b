//! HTTP Analysis Backend - Implementation of AnalysisBackend over reqwest.
//!
//! Talks to the decision analysis service with one JSON POST per analysis.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpBackendConfig::new("http://127.0.0.1:5000")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let backend = HttpAnalysisBackend::new(config)?;
//! ```
//!
//! No timeout is applied unless configured, and no request is ever retried.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::ports::{AnalysisBackend, BackendError, BackendStatus};

/// Default address of the analysis service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the HTTP analysis backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL of the service, without trailing path.
    pub base_url: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
}

impl HttpBackendConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Analysis service client.
pub struct HttpAnalysisBackend {
    config: HttpBackendConfig,
    client: Client,
}

impl HttpAnalysisBackend {
    /// Creates a new backend client with the given configuration.
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Builds the analyze endpoint URL.
    fn analyze_url(&self) -> String {
        format!("{}/analyze", self.config.base_url.trim_end_matches('/'))
    }

    /// Builds the liveness endpoint URL.
    fn status_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }

    /// Maps a reqwest transport error.
    fn transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout {
                timeout_secs: self.config.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
        } else if e.is_connect() {
            BackendError::network(format!("Connection failed: {}", e))
        } else {
            BackendError::network(e.to_string())
        }
    }

    /// Passes success responses through and turns the rest into errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, BackendError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(BackendError::status(status.as_u16(), error_body))
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, BackendError> {
        let url = self.analyze_url();
        debug!(%url, decision_id = %request.decision_id, "POST analysis request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = self.handle_response_status(response).await?;

        response
            .json::<AnalysisResponse>()
            .await
            .map_err(|e| BackendError::parse(format!("Failed to parse response: {}", e)))
    }

    async fn status(&self) -> Result<BackendStatus, BackendError> {
        let response = self
            .client
            .get(self.status_url())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = self.handle_response_status(response).await?;

        response
            .json::<BackendStatus>()
            .await
            .map_err(|e| BackendError::parse(format!("Failed to parse status: {}", e)))
    }
}
