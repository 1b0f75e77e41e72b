//! The analysis backend's success body.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;

use crate::domain::foundation::display_number;

/// Parsed body of a successful `POST /analyze`.
///
/// Unknown fields are ignored. Numbers stay as JSON numbers so they render
/// exactly as the backend wrote them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub capability_percent: Number,
    pub capability_score: Number,
    pub advice: String,
    pub pattern: String,
    pub explanation: String,
    pub butterfly_intensity: ButterflyIntensity,
    pub butterfly_effect: ImpactMap,
}

/// Intensity of the butterfly effect; the backend may send text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButterflyIntensity {
    Number(Number),
    Text(String),
}

impl fmt::Display for ButterflyIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButterflyIntensity::Number(n) => f.write_str(&display_number(n)),
            ButterflyIntensity::Text(s) => f.write_str(s),
        }
    }
}

/// Per-category impact scores, in the order the backend sent them.
///
/// Serialized as a JSON object. A repeated key keeps its first position and
/// takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactMap(Vec<(String, Number)>);

impl ImpactMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets the score for `key`, appending it if the key is new.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Number>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Number> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ImpactMap
where
    K: Into<String>,
    V: Into<Number>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ImpactMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for ImpactMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ImpactMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ImpactMapVisitor;

        impl<'de> Visitor<'de> for ImpactMapVisitor {
            type Value = ImpactMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of category names to numeric impact scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ImpactMap, A::Error> {
                let mut map = ImpactMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((key, value)) = access.next_entry::<String, Number>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ImpactMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> serde_json::Value {
        json!({
            "decision": "D1",
            "capability_percent": 64,
            "capability_score": 82,
            "advice": "Go for it",
            "pattern": "Negative Habit Loop (Compounding Loss)",
            "explanation": "Sleeping late slightly reduces sleep quality.",
            "butterfly_intensity": -540,
            "butterfly_effect": { "health": -3, "focus": -4, "career": -2 }
        })
    }

    #[test]
    fn parses_full_body_ignoring_unknown_fields() {
        let response: AnalysisResponse = serde_json::from_value(sample_body()).unwrap();
        assert_eq!(response.advice, "Go for it");
        assert_eq!(response.capability_score, Number::from(82));
        assert_eq!(
            response.butterfly_intensity,
            ButterflyIntensity::Number(Number::from(-540))
        );
    }

    #[test]
    fn impact_map_preserves_backend_order() {
        let raw = r#"{"zeta": 1, "alpha": -2, "mid": 0}"#;
        let map: ImpactMap = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn impact_map_duplicate_key_keeps_position_takes_last_value() {
        let raw = r#"{"career": 1, "health": 2, "career": 9}"#;
        let map: ImpactMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().next(), Some("career"));
        assert_eq!(map.get("career"), Some(&Number::from(9)));
    }

    #[test]
    fn impact_map_rejects_non_numeric_scores() {
        let raw = r#"{"career": "high"}"#;
        assert!(serde_json::from_str::<ImpactMap>(raw).is_err());
    }

    #[test]
    fn impact_map_serializes_as_ordered_object() {
        let map: ImpactMap = [("career", 5), ("health", -3)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"career":5,"health":-3}"#
        );
    }

    #[test]
    fn intensity_accepts_text_or_number() {
        let text: ButterflyIntensity = serde_json::from_value(json!("High")).unwrap();
        let number: ButterflyIntensity = serde_json::from_value(json!(12.5)).unwrap();
        assert_eq!(text.to_string(), "High");
        assert_eq!(number.to_string(), "12.5");
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("advice");
        assert!(serde_json::from_value::<AnalysisResponse>(body).is_err());
    }
}
