//! Result Surface Port - Where analysis output and alerts are shown.
//!
//! In the browser this is the decision page; in the terminal it is stdout and
//! stderr. Targets are assumed to exist, so operations are infallible.

use crate::domain::analysis::{Panel, TextTarget};

/// Port for writing analysis output and user-visible alerts.
pub trait ResultSurface: Send + Sync {
    /// Replaces the text of one output target.
    fn set_text(&self, target: TextTarget, value: &str);

    /// Shows or hides a container.
    fn set_visible(&self, panel: Panel, visible: bool);

    /// Shows a blocking, user-visible message.
    fn alert(&self, message: &str);
}
