//! Recording chart renderer for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::analysis::ImpactChart;
use crate::domain::foundation::ChartHandle;
use crate::ports::ChartRenderer;

#[derive(Debug, Default)]
struct ChartState {
    live: Vec<ChartHandle>,
    drawn: Vec<ImpactChart>,
    destroyed: Vec<ChartHandle>,
    peak_live: usize,
}

/// Chart renderer that only tracks draws, destroys, and live instances.
#[derive(Debug, Default)]
pub struct RecordingChartRenderer {
    next_handle: AtomicU64,
    state: Mutex<ChartState>,
}

impl RecordingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.state.lock().unwrap().live.len()
    }

    /// Most charts ever alive at the same time.
    pub fn peak_live(&self) -> usize {
        self.state.lock().unwrap().peak_live
    }

    pub fn drawn(&self) -> Vec<ImpactChart> {
        self.state.lock().unwrap().drawn.clone()
    }

    pub fn last_drawn(&self) -> Option<ImpactChart> {
        self.state.lock().unwrap().drawn.last().cloned()
    }

    pub fn destroyed(&self) -> Vec<ChartHandle> {
        self.state.lock().unwrap().destroyed.clone()
    }
}

impl ChartRenderer for RecordingChartRenderer {
    fn draw(&self, chart: &ImpactChart) -> ChartHandle {
        let handle = ChartHandle::new(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1);
        let mut state = self.state.lock().unwrap();
        state.live.push(handle);
        state.drawn.push(chart.clone());
        state.peak_live = state.peak_live.max(state.live.len());
        handle
    }

    fn destroy(&self, handle: ChartHandle) {
        let mut state = self.state.lock().unwrap();
        state.live.retain(|live| *live != handle);
        state.destroyed.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ImpactMap;

    #[test]
    fn peak_tracks_charts_left_alive() {
        let renderer = RecordingChartRenderer::new();
        let chart = ImpactChart::from_impacts(&ImpactMap::new());

        let a = renderer.draw(&chart);
        let _b = renderer.draw(&chart);
        renderer.destroy(a);

        assert_eq!(renderer.peak_live(), 2);
        assert_eq!(renderer.live_count(), 1);
        assert_eq!(renderer.destroyed(), vec![a]);
    }
}
