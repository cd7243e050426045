use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transport_server::config::SearchArgs;
use transport_server::web::{AppState, create_router};

/// Bus search JSON API for BMTC local and KSRTC intercity trips.
#[derive(Parser)]
#[command(name = "transport-server", version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "TRANSPORT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TRANSPORT_PORT", default_value_t = 8081)]
    port: u16,

    #[command(flatten)]
    search: SearchArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = cli
        .search
        .settings()
        .with_host(cli.host)
        .with_port(cli.port);

    let state = match AppState::from_settings(&settings) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };
    let app = create_router(state);

    let addr = settings.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %addr,
        profile = %settings.profile,
        offline = settings.offline,
        fallback_on_empty = settings.fallback_on_empty(),
        "Transport Help API listening"
    );
    info!("  POST /api/transport/search-buses");
    info!("  POST /api/transport/bus-route");
    info!("  POST /api/transport/bmtc-buses");
    info!("  GET  /api/transport/health");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
