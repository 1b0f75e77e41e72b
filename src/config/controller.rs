//! Form controller configuration

use serde::Deserialize;

use crate::application::{FormControllerConfig, InFlightPolicy};

/// Form controller configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControllerConfig {
    /// What to do with an analyze call while another is in flight
    #[serde(default)]
    pub in_flight_policy: InFlightPolicy,
}

impl ControllerConfig {
    /// Build the controller configuration
    pub fn to_controller_config(&self) -> FormControllerConfig {
        FormControllerConfig::default().with_in_flight_policy(self.in_flight_policy)
    }
}
