//! ImpactChartSlot - Owner of the single live impact chart.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::domain::analysis::ImpactChart;
use crate::domain::foundation::ChartHandle;
use crate::ports::ChartRenderer;

/// Holds at most one live chart and replaces it destroy-first.
pub struct ImpactChartSlot {
    renderer: Arc<dyn ChartRenderer>,
    live: Mutex<Option<ChartHandle>>,
}

impl ImpactChartSlot {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            live: Mutex::new(None),
        }
    }

    /// Destroys the current chart, if any, then draws `chart`.
    pub fn render(&self, chart: &ImpactChart) -> ChartHandle {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = live.take() {
            debug!(handle = %previous, "destroying previous impact chart");
            self.renderer.destroy(previous);
        }

        let handle = self.renderer.draw(chart);
        debug!(handle = %handle, bars = chart.labels.len(), "drew impact chart");
        *live = Some(handle);
        handle
    }

    /// Destroys the current chart, if any.
    pub fn clear(&self) {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = live.take() {
            self.renderer.destroy(previous);
        }
    }

    #[cfg(test)]
    pub(crate) fn live_handle(&self) -> Option<ChartHandle> {
        *self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
