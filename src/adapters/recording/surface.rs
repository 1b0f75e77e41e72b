//! Recording result surface for testing.
//!
//! Keeps the latest text per target, container visibility, raised alerts,
//! and the full write log so tests can assert on order.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::analysis::{Panel, TextTarget};
use crate::ports::ResultSurface;

/// One write made to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceWrite {
    Text(TextTarget, String),
    Visibility(Panel, bool),
    Alert(String),
}

#[derive(Debug, Default)]
struct SurfaceState {
    texts: HashMap<TextTarget, String>,
    visible: HashMap<Panel, bool>,
    alerts: Vec<String>,
    writes: Vec<SurfaceWrite>,
}

/// In-memory result surface.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a target, `None` if never written.
    pub fn text(&self, target: TextTarget) -> Option<String> {
        self.state.lock().unwrap().texts.get(&target).cloned()
    }

    /// Containers start hidden.
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.state
            .lock()
            .unwrap()
            .visible
            .get(&panel)
            .copied()
            .unwrap_or(false)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().unwrap().alerts.clone()
    }

    pub fn writes(&self) -> Vec<SurfaceWrite> {
        self.state.lock().unwrap().writes.clone()
    }
}

impl ResultSurface for RecordingSurface {
    fn set_text(&self, target: TextTarget, value: &str) {
        let mut state = self.state.lock().unwrap();
        state.texts.insert(target, value.to_string());
        state
            .writes
            .push(SurfaceWrite::Text(target, value.to_string()));
    }

    fn set_visible(&self, panel: Panel, visible: bool) {
        let mut state = self.state.lock().unwrap();
        state.visible.insert(panel, visible);
        state.writes.push(SurfaceWrite::Visibility(panel, visible));
    }

    fn alert(&self, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.alerts.push(message.to_string());
        state.writes.push(SurfaceWrite::Alert(message.to_string()));
    }
}
