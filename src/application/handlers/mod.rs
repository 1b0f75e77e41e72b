//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod analysis;

pub use analysis::{
    AnalysisError, FormController, FormControllerConfig, ImpactChartSlot, InFlightPolicy,
    BACKEND_FAILURE_MESSAGE, BUSY_MESSAGE,
};
