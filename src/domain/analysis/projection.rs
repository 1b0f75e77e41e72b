//! Projection of an analysis response onto the result surface.

use std::fmt;

use super::chart::ImpactChart;
use super::response::{AnalysisResponse, ImpactMap};
use crate::domain::foundation::display_number;

/// Text outputs of the result surface, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextTarget {
    Capability,
    Advice,
    Pattern,
    Impact,
    Explanation,
    DreamAnalysis,
    ButterflyIntensity,
}

impl TextTarget {
    pub const ALL: [TextTarget; 7] = [
        TextTarget::Capability,
        TextTarget::Advice,
        TextTarget::Pattern,
        TextTarget::Impact,
        TextTarget::Explanation,
        TextTarget::DreamAnalysis,
        TextTarget::ButterflyIntensity,
    ];

    /// Element id of the target on the decision page.
    pub fn element_id(&self) -> &'static str {
        match self {
            TextTarget::Capability => "capability",
            TextTarget::Advice => "advice",
            TextTarget::Pattern => "pattern",
            TextTarget::Impact => "impact",
            TextTarget::Explanation => "explanation",
            TextTarget::DreamAnalysis => "dreamAnalysis",
            TextTarget::ButterflyIntensity => "butterflyIntensity",
        }
    }

    /// Human heading for text front ends.
    pub fn heading(&self) -> &'static str {
        match self {
            TextTarget::Capability => "Capability",
            TextTarget::Advice => "Advice",
            TextTarget::Pattern => "Pattern",
            TextTarget::Impact => "Butterfly Effect",
            TextTarget::Explanation => "Explanation",
            TextTarget::DreamAnalysis => "Dream Job Analysis",
            TextTarget::ButterflyIntensity => "Butterfly Intensity",
        }
    }
}

impl fmt::Display for TextTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Containers whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Results container, hidden until a response has been parsed.
    Results,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Results => f.write_str("result"),
        }
    }
}

/// Every output derived from one response, computed before anything is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAnalysis {
    pub capability: String,
    pub advice: String,
    pub pattern: String,
    pub impact: String,
    pub explanation: String,
    pub dream_analysis: String,
    pub butterfly_intensity: String,
    pub chart: ImpactChart,
}

impl RenderedAnalysis {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        Self {
            capability: format!(
                "Capability: {}%",
                display_number(&response.capability_percent)
            ),
            advice: format!("Advice: {}", response.advice),
            pattern: response.pattern.clone(),
            impact: impact_text(&response.butterfly_effect),
            explanation: response.explanation.clone(),
            dream_analysis: format!(
                "{} (Capability Score: {})",
                response.advice,
                display_number(&response.capability_score)
            ),
            butterfly_intensity: response.butterfly_intensity.to_string(),
            chart: ImpactChart::from_impacts(&response.butterfly_effect),
        }
    }

    pub fn text(&self, target: TextTarget) -> &str {
        match target {
            TextTarget::Capability => &self.capability,
            TextTarget::Advice => &self.advice,
            TextTarget::Pattern => &self.pattern,
            TextTarget::Impact => &self.impact,
            TextTarget::Explanation => &self.explanation,
            TextTarget::DreamAnalysis => &self.dream_analysis,
            TextTarget::ButterflyIntensity => &self.butterfly_intensity,
        }
    }

    /// Text outputs in write order.
    pub fn texts(&self) -> impl Iterator<Item = (TextTarget, &str)> + '_ {
        TextTarget::ALL
            .into_iter()
            .map(move |target| (target, self.text(target)))
    }
}

/// One `KEY: value` line per impact, each followed by two spaces.
pub fn impact_text(impacts: &ImpactMap) -> String {
    impacts
        .iter()
        .map(|(key, value)| format!("{}: {}  ", key.to_uppercase(), display_number(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{BarColor, ButterflyIntensity};
    use serde_json::Number;

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            capability_percent: Number::from(64),
            capability_score: Number::from(82),
            advice: "Go for it".to_string(),
            pattern: "Positive Growth Loop (Compounding Gain)".to_string(),
            explanation: "Daily study compounds.".to_string(),
            butterfly_intensity: ButterflyIntensity::Text("High".to_string()),
            butterfly_effect: [("career", 5), ("health", -3)].into_iter().collect(),
        }
    }

    #[test]
    fn formats_every_text_output() {
        let rendered = RenderedAnalysis::from_response(&response());

        assert_eq!(rendered.capability, "Capability: 64%");
        assert_eq!(rendered.advice, "Advice: Go for it");
        assert_eq!(rendered.pattern, "Positive Growth Loop (Compounding Gain)");
        assert_eq!(rendered.explanation, "Daily study compounds.");
        assert_eq!(rendered.dream_analysis, "Go for it (Capability Score: 82)");
        assert_eq!(rendered.butterfly_intensity, "High");
    }

    #[test]
    fn impact_text_uppercases_keys_with_two_trailing_spaces() {
        let rendered = RenderedAnalysis::from_response(&response());
        assert_eq!(rendered.impact, "CAREER: 5  HEALTH: -3  ");
    }

    #[test]
    fn empty_impacts_give_empty_text() {
        assert_eq!(impact_text(&ImpactMap::new()), "");
    }

    #[test]
    fn chart_follows_impact_map() {
        let rendered = RenderedAnalysis::from_response(&response());
        assert_eq!(rendered.chart.labels, vec!["career", "health"]);
        assert_eq!(rendered.chart.values, vec![5.0, -3.0]);
        assert_eq!(rendered.chart.colors, vec![BarColor::Green, BarColor::Red]);
    }

    #[test]
    fn texts_are_yielded_in_write_order() {
        let rendered = RenderedAnalysis::from_response(&response());
        let targets: Vec<TextTarget> = rendered.texts().map(|(t, _)| t).collect();
        assert_eq!(targets, TextTarget::ALL.to_vec());
    }

    #[test]
    fn element_ids_match_decision_page() {
        assert_eq!(TextTarget::DreamAnalysis.element_id(), "dreamAnalysis");
        assert_eq!(TextTarget::ButterflyIntensity.to_string(), "butterflyIntensity");
        assert_eq!(Panel::Results.to_string(), "result");
    }
}
