use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use predictext_cli::{session, tracing_setup, Args};
use predictext_core::constants::VERSION;
use predictext_panel::{ConsoleView, PredictionPanel, SubmitOutcome};
use predictext_transport::HttpTransport;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("predictext: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args
        .resolve_config()
        .context("failed to load configuration")?;
    tracing_setup::init_tracing(&config.observability);

    tracing::info!(
        version = VERSION,
        endpoint = %config.transport.prediction_url(),
        method = %config.transport.method,
        trigger = ?config.panel.trigger_mode,
        "starting predictext"
    );

    let transport = HttpTransport::new(&config.transport).context("failed to build HTTP client")?;
    let panel = PredictionPanel::new(
        ConsoleView::new(std::io::stdout()),
        transport,
        config.panel.clone(),
    );

    if let Some(text) = &args.once {
        return Ok(match session::run_once(&panel, text) {
            SubmitOutcome::Failed { .. } => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        });
    }

    session::run_interactive(&panel, std::io::stdin().lock()).context("failed to read input")?;
    Ok(ExitCode::SUCCESS)
}
