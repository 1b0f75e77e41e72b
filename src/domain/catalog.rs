//! Catalog of the micro decisions the analysis service knows.
//!
//! Ids are what the decision form submits. The service treats unknown ids
//! as neutral, so the catalog describes choices but never gates a request.

use serde::Serialize;
use std::fmt;

/// Whether a decision builds a positive or a negative habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Bad,
    Good,
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionKind::Bad => f.pad("bad"),
            DecisionKind::Good => f.pad("good"),
        }
    }
}

/// One selectable decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecisionOption {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: DecisionKind,
}

/// All decisions, in the order the form lists them.
pub static DECISIONS: [DecisionOption; 10] = [
    DecisionOption { id: "D1", label: "Sleeping late", kind: DecisionKind::Bad },
    DecisionOption { id: "D2", label: "Low study time", kind: DecisionKind::Bad },
    DecisionOption { id: "D3", label: "Excess social media", kind: DecisionKind::Bad },
    DecisionOption { id: "D4", label: "Skipping exercise", kind: DecisionKind::Bad },
    DecisionOption { id: "D5", label: "Eating junk food", kind: DecisionKind::Bad },
    DecisionOption { id: "G1", label: "Consistent sleep", kind: DecisionKind::Good },
    DecisionOption { id: "G2", label: "Daily study", kind: DecisionKind::Good },
    DecisionOption { id: "G3", label: "Exercise", kind: DecisionKind::Good },
    DecisionOption { id: "G4", label: "Reading / learning", kind: DecisionKind::Good },
    DecisionOption { id: "G5", label: "Healthy diet", kind: DecisionKind::Good },
];

/// Looks up a decision by its exact id.
pub fn find_decision(id: &str) -> Option<&'static DecisionOption> {
    DECISIONS.iter().find(|decision| decision.id == id)
}
