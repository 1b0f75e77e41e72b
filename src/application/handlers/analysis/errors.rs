//! Errors of the analyze operation.

use thiserror::Error;

use crate::domain::analysis::MissingInput;
use crate::ports::BackendError;

/// Message shown for every backend failure.
pub const BACKEND_FAILURE_MESSAGE: &str =
    "Error connecting to backend. Make sure server is running.";

/// Message shown when the reject policy turns an invocation away.
pub const BUSY_MESSAGE: &str = "An analysis is already running. Please wait.";

/// Why an analyze invocation did not render a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A required form field was empty; no request was sent.
    #[error(transparent)]
    MissingInput(#[from] MissingInput),

    /// The backend call failed, returned an error status, or sent an
    /// unparsable body.
    #[error("analysis backend failed: {0}")]
    Backend(#[from] BackendError),

    /// Another invocation was in flight and the reject policy is active.
    #[error("another analysis is already in flight")]
    Busy,

    /// A newer invocation started before this one's response arrived.
    #[error("superseded by a newer analysis")]
    Superseded,
}

impl AnalysisError {
    /// Text shown to the user for this failure, if any.
    ///
    /// Superseded invocations stay silent: the newer invocation reports.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AnalysisError::MissingInput(missing) => Some(missing.to_string()),
            AnalysisError::Backend(_) => Some(BACKEND_FAILURE_MESSAGE.to_string()),
            AnalysisError::Busy => Some(BUSY_MESSAGE.to_string()),
            AnalysisError::Superseded => None,
        }
    }
}
