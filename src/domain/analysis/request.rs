//! Form state and the request built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw values of the four decision form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Selected decision id (e.g. `D1`).
    pub decision: String,
    /// How often the decision is repeated, in hours.
    pub frequency: String,
    /// Period the decision is repeated over, in days.
    pub time_period: String,
    /// Free-text dream job.
    pub dream_job: String,
}

impl FormState {
    pub fn new(
        decision: impl Into<String>,
        frequency: impl Into<String>,
        time_period: impl Into<String>,
        dream_job: impl Into<String>,
    ) -> Self {
        Self {
            decision: decision.into(),
            frequency: frequency.into(),
            time_period: time_period.into(),
            dream_job: dream_job.into(),
        }
    }

    /// Checks that every required field is present.
    ///
    /// Checks run in a fixed order and the first failure wins: decision,
    /// then dream job, then frequency and time period together. Values are
    /// not trimmed, so a whitespace-only entry counts as present.
    pub fn validate(&self) -> Result<(), MissingInput> {
        if self.decision.is_empty() {
            return Err(MissingInput::Decision);
        }
        if self.dream_job.is_empty() {
            return Err(MissingInput::DreamJob);
        }
        if self.frequency.is_empty() || self.time_period.is_empty() {
            return Err(MissingInput::Schedule);
        }
        Ok(())
    }

    /// Validates the form and builds the outbound request.
    pub fn to_request(&self) -> Result<AnalysisRequest, MissingInput> {
        self.validate()?;
        Ok(AnalysisRequest {
            decision_id: self.decision.clone(),
            frequency: self.frequency.clone(),
            time_period: self.time_period.clone(),
            dream_job: self.dream_job.clone(),
        })
    }
}

/// A required form field left empty. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingInput {
    #[error("Please select a decision first.")]
    Decision,

    #[error("Please enter your dream job.")]
    DreamJob,

    #[error("Please enter frequency (hours) and time period (days).")]
    Schedule,
}

/// Body of the `POST /analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub decision_id: String,
    pub frequency: String,
    pub time_period: String,
    pub dream_job: String,
}
