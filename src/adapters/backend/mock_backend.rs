//! Mock Analysis Backend for testing.
//!
//! Provides a configurable mock implementation of the AnalysisBackend port,
//! allowing the controller to run without the analysis service.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Per-response delays for overlap testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let backend = MockAnalysisBackend::new()
//!     .with_response(sample_response())
//!     .with_error(MockError::Network { message: "refused".into() });
//!
//! backend.analyze(&request).await?;
//! assert_eq!(backend.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::Number;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse, ButterflyIntensity};
use crate::ports::{AnalysisBackend, BackendError, BackendStatus};

/// Canonical success body used when no response is queued.
pub fn sample_response() -> AnalysisResponse {
    AnalysisResponse {
        capability_percent: Number::from(64),
        capability_score: Number::from(82),
        advice: "Go for it".to_string(),
        pattern: "Positive Growth Loop (Compounding Gain)".to_string(),
        explanation: "Studying daily builds knowledge that compounds into career growth."
            .to_string(),
        butterfly_intensity: ButterflyIntensity::Number(Number::from(600)),
        butterfly_effect: [("health", 1), ("focus", 4), ("career", 5)]
            .into_iter()
            .collect(),
    }
}

/// Mock analysis backend for testing.
#[derive(Debug, Clone)]
pub struct MockAnalysisBackend {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<QueuedReply>>>,
    /// Liveness body to return.
    status: BackendStatus,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<AnalysisRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a parsed success body.
    Success(AnalysisResponse),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a refused or dropped connection.
    Network { message: String },
    /// Simulate a non-success status.
    Status { status: u16, body: String },
    /// Simulate an unparsable body.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for BackendError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Network { message } => BackendError::network(message),
            MockError::Status { status, body } => BackendError::status(status, body),
            MockError::Parse { message } => BackendError::parse(message),
            MockError::Timeout { timeout_secs } => BackendError::Timeout { timeout_secs },
        }
    }
}

#[derive(Debug, Clone)]
struct QueuedReply {
    reply: MockReply,
    delay: Option<Duration>,
}

impl Default for MockAnalysisBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalysisBackend {
    /// Creates a new mock backend with default settings.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            status: BackendStatus::new("Backend running", "Mock analysis backend"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, response: AnalysisResponse) -> Self {
        self.enqueue(MockReply::Success(response), None)
    }

    /// Adds a successful response that arrives after `delay`.
    pub fn with_delayed_response(self, response: AnalysisResponse, delay: Duration) -> Self {
        self.enqueue(MockReply::Success(response), Some(delay))
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.enqueue(MockReply::Error(error), None)
    }

    /// Adds an error response that arrives after `delay`.
    pub fn with_delayed_error(self, error: MockError, delay: Duration) -> Self {
        self.enqueue(MockReply::Error(error), Some(delay))
    }

    /// Sets the liveness body.
    pub fn with_status(mut self, status: BackendStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the number of analyze calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded requests.
    pub fn get_calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn enqueue(self, reply: MockReply, delay: Option<Duration>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(QueuedReply { reply, delay });
        self
    }

    /// Gets the next reply or the sample response.
    fn next_reply(&self) -> QueuedReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| QueuedReply {
                reply: MockReply::Success(sample_response()),
                delay: None,
            })
    }
}

#[async_trait]
impl AnalysisBackend for MockAnalysisBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, BackendError> {
        self.calls.lock().unwrap().push(request.clone());

        let QueuedReply { reply, delay } = self.next_reply();
        if let Some(delay) = delay {
            sleep(delay).await;
        }

        match reply {
            MockReply::Success(response) => Ok(response),
            MockReply::Error(error) => Err(error.into()),
        }
    }

    async fn status(&self) -> Result<BackendStatus, BackendError> {
        Ok(self.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::FormState;

    fn request() -> AnalysisRequest {
        FormState::new("D3", "3", "14", "Writer").to_request().unwrap()
    }

    #[tokio::test]
    async fn returns_queued_replies_in_order() {
        let mut custom = sample_response();
        custom.advice = "Reconsider".to_string();
        let backend = MockAnalysisBackend::new()
            .with_response(custom)
            .with_error(MockError::Parse {
                message: "bad json".to_string(),
            });

        let first = backend.analyze(&request()).await.unwrap();
        let second = backend.analyze(&request()).await;

        assert_eq!(first.advice, "Reconsider");
        assert_eq!(second, Err(BackendError::parse("bad json")));
    }

    #[tokio::test]
    async fn falls_back_to_sample_response() {
        let backend = MockAnalysisBackend::new();
        let response = backend.analyze(&request()).await.unwrap();
        assert_eq!(response, sample_response());
    }

    #[tokio::test]
    async fn records_every_call() {
        let backend = MockAnalysisBackend::new();
        backend.analyze(&request()).await.unwrap();
        backend.analyze(&request()).await.unwrap();

        assert_eq!(backend.call_count(), 2);
        assert_eq!(backend.get_calls()[0].dream_job, "Writer");

        backend.clear_calls();
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_queue_and_history() {
        let backend = MockAnalysisBackend::new().with_error(MockError::Timeout { timeout_secs: 5 });
        let clone = backend.clone();

        assert!(clone.analyze(&request()).await.is_err());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn status_returns_configured_body() {
        let backend = MockAnalysisBackend::new()
            .with_status(BackendStatus::new("Backend running", "custom"));
        let status = backend.status().await.unwrap();
        assert_eq!(status.message, "custom");
    }
}
