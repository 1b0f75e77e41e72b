//! Decision analysis handlers.
//!
//! - `FormController` - Validates the decision form, calls the analysis
//!   backend, and renders the result
//! - `ImpactChartSlot` - Single-owner, destroy-before-replace chart holder

mod chart_slot;
mod errors;
mod form_controller;
mod in_flight;

pub use chart_slot::ImpactChartSlot;
pub use errors::{AnalysisError, BACKEND_FAILURE_MESSAGE, BUSY_MESSAGE};
pub use form_controller::{FormController, FormControllerConfig};
pub use in_flight::InFlightPolicy;
