use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wage_estimator::api::{AppState, create_router};
use wage_estimator::config::WageTableLoader;
use wage_estimator::error::EstimatorError;
use wage_estimator::models::WageTable;

/// Data center contractor wage estimator.
///
/// Serves `/api/wage` and the estimator page.
///
/// Examples:
///   wage-estimator
///   wage-estimator --port 9000
///   wage-estimator --wage-table ./config/wage_table.yaml --log-json
#[derive(Parser)]
#[command(name = "wage-estimator", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = 8787)]
    port: u16,

    /// Load the wage table from this YAML file instead of the built-in one.
    #[arg(long)]
    wage_table: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_table(path: Option<&Path>) -> Result<WageTable, EstimatorError> {
    match path {
        Some(path) => WageTableLoader::load(path),
        None => WageTableLoader::builtin(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let table = load_table(cli.wage_table.as_deref()).inspect_err(|e| {
        error!(error = %e, "Failed to load wage table");
    })?;
    let source = cli
        .wage_table
        .as_ref()
        .map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    info!(
        countries = table.countries().len(),
        wages = table.leaf_count(),
        effective_date = %table.effective_date(),
        source = %source,
        "Wage table loaded"
    );

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(addr = %listener.local_addr()?, "Wage estimator listening");

    axum::serve(listener, create_router(AppState::new(table)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
