//! Application layer - Handlers coordinating the domain and the ports.

pub mod handlers;

pub use handlers::{
    AnalysisError, FormController, FormControllerConfig, ImpactChartSlot, InFlightPolicy,
    BACKEND_FAILURE_MESSAGE, BUSY_MESSAGE,
};
