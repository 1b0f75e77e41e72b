mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use crate::cli::{AnalyzeArgs, Args, Command};
use micro_decision::adapters::{HttpAnalysisBackend, TerminalChartRenderer, TerminalSurface};
use micro_decision::application::FormController;
use micro_decision::config::{AppConfig, LoggingConfig};
use micro_decision::domain::catalog::{find_decision, DECISIONS};
use micro_decision::ports::AnalysisBackend;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(url) = &args.backend_url {
        config.backend.base_url = url.clone();
    }
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging)?;

    info!(
        backend = %config.backend.base_url,
        in_flight_policy = ?config.controller.in_flight_policy,
        "micro-decision starting"
    );

    match &args.command {
        Command::Analyze(form) => analyze(&config, form, args.color).await,
        Command::Decisions => {
            print_decisions();
            Ok(ExitCode::SUCCESS)
        }
        Command::Status => status(&config).await,
    }
}

async fn analyze(config: &AppConfig, form: &AnalyzeArgs, color: bool) -> anyhow::Result<ExitCode> {
    let backend = HttpAnalysisBackend::new(config.backend.to_http_config())
        .context("failed to build analysis backend client")?;
    let controller = FormController::with_config(
        Arc::new(backend),
        Arc::new(TerminalSurface::stdio()),
        Arc::new(TerminalChartRenderer::stdout().with_color(color)),
        config.controller.to_controller_config(),
    );

    let form = form.to_form();
    match find_decision(&form.decision) {
        Some(decision) => debug!(label = decision.label, kind = %decision.kind, "decision selected"),
        None => debug!(decision = %form.decision, "decision not in catalog"),
    }

    match controller.analyze(&form).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(error = %err, "analysis did not render");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn status(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let backend = HttpAnalysisBackend::new(config.backend.to_http_config())
        .context("failed to build analysis backend client")?;

    match backend.status().await {
        Ok(status) => {
            println!("{}: {}", status.status, status.message);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Backend unreachable at {}: {}", config.backend.base_url, err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_decisions() {
    for decision in DECISIONS {
        println!("{:<4}{:<6}{}", decision.id, decision.kind, decision.label);
    }
}

fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
