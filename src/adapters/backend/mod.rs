//! Analysis Backend Adapters.
//!
//! - `HttpAnalysisBackend` - The analysis service over HTTP (reqwest)
//! - `MockAnalysisBackend` - Configurable mock for testing

mod http_backend;
mod mock_backend;

pub use http_backend::{HttpAnalysisBackend, HttpBackendConfig, DEFAULT_BASE_URL};
pub use mock_backend::{sample_response, MockAnalysisBackend, MockError, MockReply};
