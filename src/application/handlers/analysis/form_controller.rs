//! FormController - Runs the decision form's analyze operation.
//!
//! One invocation validates the form, sends one request to the analysis
//! backend, and on success writes every output and redraws the impact chart.
//! Failures are alerted on the result surface and nothing else changes.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, info_span, warn, Instrument};

use super::chart_slot::ImpactChartSlot;
use super::errors::AnalysisError;
use super::in_flight::{InFlightPolicy, InFlightTracker, Ticket};
use crate::domain::analysis::{FormState, Panel, RenderedAnalysis};
use crate::domain::foundation::InvocationId;
use crate::ports::{AnalysisBackend, ChartRenderer, ResultSurface};

/// Configuration for the form controller.
#[derive(Debug, Clone, Default)]
pub struct FormControllerConfig {
    pub in_flight_policy: InFlightPolicy,
}

impl FormControllerConfig {
    pub fn with_in_flight_policy(mut self, policy: InFlightPolicy) -> Self {
        self.in_flight_policy = policy;
        self
    }
}

/// Controller behind the decision form.
pub struct FormController {
    backend: Arc<dyn AnalysisBackend>,
    surface: Arc<dyn ResultSurface>,
    chart: ImpactChartSlot,
    in_flight: InFlightTracker,
    render_lock: Mutex<()>,
    config: FormControllerConfig,
}

impl FormController {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        surface: Arc<dyn ResultSurface>,
        chart_renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self::with_config(backend, surface, chart_renderer, FormControllerConfig::default())
    }

    pub fn with_config(
        backend: Arc<dyn AnalysisBackend>,
        surface: Arc<dyn ResultSurface>,
        chart_renderer: Arc<dyn ChartRenderer>,
        config: FormControllerConfig,
    ) -> Self {
        Self {
            backend,
            surface,
            chart: ImpactChartSlot::new(chart_renderer),
            in_flight: InFlightTracker::new(),
            render_lock: Mutex::new(()),
            config,
        }
    }

    /// Analyzes the form and renders the result.
    ///
    /// Every failure the user should see has already been alerted when this
    /// returns `Err`; the error tells the caller which path was taken.
    pub async fn analyze(&self, form: &FormState) -> Result<RenderedAnalysis, AnalysisError> {
        let invocation_id = InvocationId::new();
        let span = info_span!(
            "analyze",
            invocation_id = %invocation_id,
            decision = %form.decision
        );
        self.run(form).instrument(span).await
    }

    /// Releases the live chart, if any.
    pub fn clear_chart(&self) {
        self.chart.clear();
    }

    /// Number of requests currently awaiting a response.
    pub fn requests_in_flight(&self) -> usize {
        self.in_flight.active()
    }

    async fn run(&self, form: &FormState) -> Result<RenderedAnalysis, AnalysisError> {
        let result = self.attempt(form).await;
        if let Err(err) = &result {
            if let Some(message) = err.user_message() {
                self.surface.alert(&message);
            }
        }
        result
    }

    async fn attempt(&self, form: &FormState) -> Result<RenderedAnalysis, AnalysisError> {
        let request = form.to_request().map_err(|missing| {
            warn!(reason = %missing, "decision form incomplete");
            missing
        })?;

        let ticket = self.begin()?;
        debug!(generation = ticket.generation(), "sending analysis request");

        let result = self.backend.analyze(&request).await;

        let _render = self.render_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if !ticket.is_current() {
            debug!(
                generation = ticket.generation(),
                succeeded = result.is_ok(),
                "dropping response of superseded analysis"
            );
            return Err(AnalysisError::Superseded);
        }

        let response = result.map_err(|err| {
            error!(error = %err, "analysis request failed");
            err
        })?;
        let rendered = RenderedAnalysis::from_response(&response);
        self.render(&rendered);
        debug!(impacts = rendered.chart.labels.len(), "analysis rendered");
        Ok(rendered)
    }

    fn begin(&self) -> Result<Ticket<'_>, AnalysisError> {
        match self.config.in_flight_policy {
            InFlightPolicy::Supersede => Ok(self.in_flight.begin()),
            InFlightPolicy::Reject => self.in_flight.try_begin_exclusive().ok_or_else(|| {
                warn!("analysis already in flight, rejecting");
                AnalysisError::Busy
            }),
        }
    }

    fn render(&self, rendered: &RenderedAnalysis) {
        self.surface.set_visible(Panel::Results, true);
        for (target, text) in rendered.texts() {
            self.surface.set_text(target, text);
        }
        self.chart.render(&rendered.chart);
    }
}
