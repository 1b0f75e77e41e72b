//! Analysis Backend Port - Interface to the decision analysis service.
//!
//! The service computing capability, pattern, and butterfly effect for a
//! decision is an external collaborator. This port is the only way the
//! application reaches it, so the controller can run against the real HTTP
//! service or an in-memory mock.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedBackend(AnalysisResponse);
//!
//! #[async_trait]
//! impl AnalysisBackend for FixedBackend {
//!     async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResponse, BackendError> {
//!         Ok(self.0.clone())
//!     }
//!
//!     async fn status(&self) -> Result<BackendStatus, BackendError> {
//!         Ok(BackendStatus::new("Backend running", "fixed"))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};

/// Port for the decision analysis service.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Sends one analysis request and returns the parsed success body.
    ///
    /// A non-success status, a transport failure, and an unparsable body are
    /// all errors. Implementations must not retry.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, BackendError>;

    /// Probes the service's liveness endpoint.
    async fn status(&self) -> Result<BackendStatus, BackendError>;
}

/// Body of the service's liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    pub message: String,
}

impl BackendStatus {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }
}

/// Errors from analysis backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The service answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The success body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Configuration(String),
}

impl BackendError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
