//! Decision analysis domain.
//!
//! Form validation, the request/response contract of the analysis backend,
//! and the pure projection of a response onto text outputs and a bar chart.
//!
//! Nothing here performs I/O; the application layer wires these types to
//! the backend and result surface ports.

mod chart;
mod projection;
mod request;
mod response;

pub use chart::{BarColor, ImpactChart, IMPACT_DATASET_LABEL};
pub use projection::{impact_text, Panel, RenderedAnalysis, TextTarget};
pub use request::{AnalysisRequest, FormState, MissingInput};
pub use response::{AnalysisResponse, ButterflyIntensity, ImpactMap};
