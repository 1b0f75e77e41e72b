//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `AnalysisBackend` - The decision analysis service (`POST /analyze`)
//! - `ResultSurface` - Text outputs, container visibility, and alerts
//! - `ChartRenderer` - Bar chart draw/destroy capability

mod analysis_backend;
mod chart_renderer;
mod result_surface;

pub use analysis_backend::{AnalysisBackend, BackendError, BackendStatus};
pub use chart_renderer::ChartRenderer;
pub use result_surface::ResultSurface;
