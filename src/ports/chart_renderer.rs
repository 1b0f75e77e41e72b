//! Chart Renderer Port - External bar chart capability.
//!
//! A renderer draws a bar chart and hands back a handle; the handle must be
//! destroyed before the drawing it refers to can be released. Ownership of
//! the single live chart lives in the application layer's chart slot.

use crate::domain::analysis::ImpactChart;
use crate::domain::foundation::ChartHandle;

/// Port for drawing and releasing bar charts.
pub trait ChartRenderer: Send + Sync {
    /// Draws a new chart and returns its handle.
    fn draw(&self, chart: &ImpactChart) -> ChartHandle;

    /// Releases a chart previously returned by [`ChartRenderer::draw`].
    fn destroy(&self, handle: ChartHandle);
}
