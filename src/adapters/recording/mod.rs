//! In-memory result surface and chart renderer.
//!
//! Used by tests and by embedders that want the rendered output as data.

mod chart;
mod surface;

pub use chart::RecordingChartRenderer;
pub use surface::{RecordingSurface, SurfaceWrite};
