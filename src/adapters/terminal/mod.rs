//! Terminal front end adapters.
//!
//! - `TerminalSurface` - Results on stdout, alerts on stderr
//! - `TerminalChartRenderer` - Horizontal text bar chart

mod chart;
mod surface;

pub use chart::{render_bars, TerminalChartRenderer, DEFAULT_BAR_WIDTH};
pub use surface::{format_line, TerminalSurface};
