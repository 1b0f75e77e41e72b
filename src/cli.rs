use clap::{Parser, Subcommand};

use micro_decision::domain::analysis::FormState;

#[derive(Parser, Debug)]
#[command(
    name = "micro-decision",
    version,
    about = "Butterfly-effect analysis of small daily decisions"
)]
pub(crate) struct Args {
    /// Analysis backend base URL, overriding configuration
    #[arg(long)]
    pub(crate) backend_url: Option<String>,
    /// Color chart bars green/red
    #[arg(long, default_value_t = false)]
    pub(crate) color: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze one decision and print the results
    Analyze(AnalyzeArgs),
    /// List the selectable decisions
    Decisions,
    /// Check that the analysis backend is running
    Status,
}

/// The decision form. Fields left out are submitted empty.
#[derive(clap::Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Decision id, e.g. D1 or G3
    #[arg(long, default_value = "")]
    pub(crate) decision: String,
    /// How often the decision is repeated, in hours
    #[arg(long, default_value = "")]
    pub(crate) frequency: String,
    /// Period the decision is repeated over, in days
    #[arg(long, default_value = "")]
    pub(crate) time_period: String,
    /// Your dream job
    #[arg(long, default_value = "")]
    pub(crate) dream_job: String,
}

impl AnalyzeArgs {
    pub(crate) fn to_form(&self) -> FormState {
        FormState::new(
            self.decision.clone(),
            self.frequency.clone(),
            self.time_period.clone(),
            self.dream_job.clone(),
        )
    }
}
