//! Terminal result surface.
//!
//! Results go to the output stream, alerts to the error stream. Text written
//! while the results container is hidden is held back and printed, in target
//! order, once the container is shown.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::domain::analysis::{Panel, TextTarget};
use crate::ports::ResultSurface;

const HEADING_WIDTH: usize = 21;

#[derive(Debug, Default)]
struct TerminalState {
    visible: bool,
    texts: BTreeMap<TextTarget, String>,
}

/// Result surface printing to a pair of writers.
pub struct TerminalSurface {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    state: Mutex<TerminalState>,
}

impl TerminalSurface {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            state: Mutex::new(TerminalState::default()),
        }
    }

    /// Surface over the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    fn print(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write results to terminal");
        }
    }
}

/// `Heading:` padded to a fixed column, followed by the value.
pub fn format_line(target: TextTarget, value: &str) -> String {
    let heading = format!("{}:", target.heading());
    format!("{:<width$}{}", heading, value, width = HEADING_WIDTH)
}

impl ResultSurface for TerminalSurface {
    fn set_text(&self, target: TextTarget, value: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.texts.insert(target, value.to_string());
        if state.visible {
            self.print(&[format_line(target, value)]);
        }
    }

    fn set_visible(&self, _panel: Panel, visible: bool) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.visible == visible {
            return;
        }
        state.visible = visible;
        if visible {
            let mut lines = vec!["=== Decision Analysis ===".to_string()];
            lines.extend(
                state
                    .texts
                    .iter()
                    .map(|(target, value)| format_line(*target, value)),
            );
            self.print(&lines);
        }
    }

    fn alert(&self, message: &str) {
        let mut err = self.err.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(err, "! {}", message).and_then(|_| err.flush()) {
            warn!(error = %e, "failed to write alert to terminal");
        }
    }
}
