//! cicd-probe: deployment smoke-test service.
//!
//! This is the application entry point. It parses arguments, loads optional
//! configuration, initializes tracing, builds the router and runs the HTTP
//! server. Any startup failure is logged and the process exits non-zero.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cicd_probe::config::{AppConfig, ConfigError, LogFormat, DEFAULT_LOG_FILTER};
use cicd_probe::http::start_server;
use cicd_probe::{create_router, StartupError};

/// cicd-probe: answers GET / with a fixed message to confirm a deployment
#[derive(Parser, Debug)]
#[command(name = "cicd-probe", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "cicd_probe=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Config is loaded before tracing so the log format can come from it
    let config = match &args.config {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    };

    let log_format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(args.log_level, log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            // The log filter may drop the event above; stderr always gets the cause
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with priority: CLI > env > default.
fn init_tracing(cli_filter: Option<String>, format: LogFormat) {
    let log_filter = cli_filter
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> Result<(), StartupError> {
    let config = config?;
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
