//! Terminal bar chart renderer.
//!
//! Draws the impact chart as horizontal bars. When any value is negative the
//! chart is two-sided around a zero axis; otherwise bars grow from the axis.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::domain::analysis::{BarColor, ImpactChart};
use crate::domain::foundation::ChartHandle;
use crate::ports::ChartRenderer;

const BAR: &str = "█";
const RESET: &str = "\x1b[0m";

/// Default number of cells for the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 30;

fn ansi(color: BarColor) -> &'static str {
    match color {
        BarColor::Green => "\x1b[32m",
        BarColor::Red => "\x1b[31m",
    }
}

/// Renders the chart to text lines.
pub fn render_bars(chart: &ImpactChart, width: usize, color: bool) -> Vec<String> {
    let mut lines = vec![format!("{}:", chart.dataset_label)];
    if chart.is_empty() {
        lines.push("  (no impacts)".to_string());
        return lines;
    }

    let label_width = chart
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_abs = chart.values.iter().fold(0.0_f64, |max, v| max.max(v.abs()));
    let two_sided = chart.values.iter().any(|v| *v < 0.0);

    for (label, value, bar_color) in chart.bars() {
        let len = if max_abs > 0.0 {
            ((value.abs() / max_abs) * width as f64).round() as usize
        } else {
            0
        };
        let bar = BAR.repeat(len);
        let bar = if color && len > 0 {
            format!("{}{}{}", ansi(bar_color), bar, RESET)
        } else {
            bar
        };

        let bars = match (two_sided, value < 0.0) {
            (true, true) => format!("{}{}|", " ".repeat(width - len), bar),
            (true, false) => format!("{}|{}", " ".repeat(width), bar),
            (false, _) => format!("|{}", bar),
        };
        lines.push(format!(
            "  {:<label_width$} {} {}",
            label,
            bars,
            value,
            label_width = label_width
        ));
    }

    lines
}

/// Chart renderer printing to a writer.
pub struct TerminalChartRenderer {
    out: Mutex<Box<dyn Write + Send>>,
    width: usize,
    color: bool,
    next_handle: AtomicU64,
}

impl TerminalChartRenderer {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            width: DEFAULT_BAR_WIDTH,
            color: false,
            next_handle: AtomicU64::new(0),
        }
    }

    /// Renderer over the process's stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn draw(&self, chart: &ImpactChart) -> ChartHandle {
        let handle = ChartHandle::new(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1);
        let lines = render_bars(chart, self.width, self.color);

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            warn!(error = %e, %handle, "failed to draw chart to terminal");
        }
        handle
    }

    fn destroy(&self, handle: ChartHandle) {
        // Printed output scrolls away; nothing to erase.
        debug!(%handle, "released terminal chart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ImpactMap;

    fn chart(entries: &[(&str, i64)]) -> ImpactChart {
        let impacts: ImpactMap = entries.iter().copied().collect();
        ImpactChart::from_impacts(&impacts)
    }

    #[test]
    fn two_sided_chart_around_zero_axis() {
        let lines = render_bars(&chart(&[("career", 5), ("health", -3)]), 10, false);

        assert_eq!(lines[0], "Impact Score:");
        assert_eq!(
            lines[1],
            format!("  career {}|{} 5", " ".repeat(10), BAR.repeat(10))
        );
        assert_eq!(
            lines[2],
            format!("  health {}{}| -3", " ".repeat(4), BAR.repeat(6))
        );
    }

    #[test]
    fn one_sided_chart_when_all_non_negative() {
        let lines = render_bars(&chart(&[("focus", 4), ("career", 2)]), 4, false);
        assert_eq!(lines[1], format!("  focus  |{} 4", BAR.repeat(4)));
        assert_eq!(lines[2], format!("  career |{} 2", BAR.repeat(2)));
    }

    #[test]
    fn all_zero_values_draw_empty_bars() {
        let lines = render_bars(&chart(&[("health", 0)]), 8, false);
        assert_eq!(lines[1], "  health | 0");
    }

    #[test]
    fn empty_chart_says_so() {
        let lines = render_bars(&chart(&[]), 8, false);
        assert_eq!(lines, vec!["Impact Score:", "  (no impacts)"]);
    }

    #[test]
    fn color_wraps_bars_in_ansi_codes() {
        let lines = render_bars(&chart(&[("career", 5), ("health", -5)]), 2, true);
        assert!(lines[1].contains(&format!("\x1b[32m{}\x1b[0m", BAR.repeat(2))));
        assert!(lines[2].contains(&format!("\x1b[31m{}\x1b[0m", BAR.repeat(2))));
    }

    #[test]
    fn handles_increase_per_draw() {
        let renderer = TerminalChartRenderer::new(Box::new(io::sink()));
        let first = renderer.draw(&chart(&[("career", 1)]));
        renderer.destroy(first);
        let second = renderer.draw(&chart(&[("career", 2)]));
        assert!(second > first);
    }
}
