//! Bar chart description of the butterfly effect.

use serde::Serialize;

use super::response::ImpactMap;

/// Dataset label shown on the impact chart.
pub const IMPACT_DATASET_LABEL: &str = "Impact Score";

/// Fill color of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    /// Non-negative impact.
    Green,
    /// Negative impact.
    Red,
}

impl BarColor {
    pub fn for_value(value: f64) -> Self {
        if value >= 0.0 {
            BarColor::Green
        } else {
            BarColor::Red
        }
    }

    /// CSS color used by browser chart renderers.
    pub fn css(&self) -> &'static str {
        match self {
            BarColor::Green => "rgba(0, 200, 0, 0.6)",
            BarColor::Red => "rgba(200,0,0,0.6)",
        }
    }
}

/// Everything a chart renderer needs to draw the impact bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactChart {
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<BarColor>,
    /// The value axis always includes zero.
    pub begin_at_zero: bool,
}

impl ImpactChart {
    /// Builds the chart from the impact map, one bar per entry in map order.
    pub fn from_impacts(impacts: &ImpactMap) -> Self {
        let mut labels = Vec::with_capacity(impacts.len());
        let mut values = Vec::with_capacity(impacts.len());
        let mut colors = Vec::with_capacity(impacts.len());

        for (key, value) in impacts.iter() {
            let value = value.as_f64().unwrap_or(0.0);
            labels.push(key.to_string());
            values.push(value);
            colors.push(BarColor::for_value(value));
        }

        Self {
            dataset_label: IMPACT_DATASET_LABEL,
            labels,
            values,
            colors,
            begin_at_zero: true,
        }
    }

    /// Iterates `(label, value, color)` per bar.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64, BarColor)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| (label.as_str(), *value, *color))
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
