//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `backend` - Analysis service clients (HTTP, mock)
//! - `terminal` - Result surface and chart renderer for the command line
//! - `recording` - In-memory surface and chart renderer

pub mod backend;
pub mod recording;
pub mod terminal;

pub use backend::{HttpAnalysisBackend, HttpBackendConfig, MockAnalysisBackend};
pub use recording::{RecordingChartRenderer, RecordingSurface};
pub use terminal::{TerminalChartRenderer, TerminalSurface};
