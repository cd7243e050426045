use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tokio::io::BufReader;
use tracing::error;
use tracing_subscriber::EnvFilter;

use transport_server::cli;
use transport_server::config::SearchArgs;
use transport_server::search::SearchEngine;

/// Interactive bus finder for Bangalore and Karnataka.
///
/// Asks for a starting point and a destination. Trips inside Bangalore list
/// BMTC buses; anything else lists KSRTC intercity services for a date.
#[derive(Parser)]
#[command(name = "bus-finder", version, about)]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Cli::parse().search.settings();
    let engine = match SearchEngine::from_settings(&settings) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let today = Local::now().date_naive();

    match cli::run(&engine, &mut stdin, &mut stdout, today).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "search failed");
            ExitCode::FAILURE
        }
    }
}
