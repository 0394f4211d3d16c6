//! MDC Server - component documentation lookup
//!
//! Serves metadata and content of MDX component documentation over HTTP, or
//! prints them once from the command line.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdc_server::api::{create_router, AppState};
use mdc_server::cli::{require_components_dir, Cli, Command};
use mdc_server::service::format_component_list;
use mdc_server::{ComponentService, Config};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables, then CLI overrides
/// 3. Resolve the components directory
/// 4. Run the requested command
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdc_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    let components_dir = require_components_dir(&config)?;
    info!(
        "Configuration loaded: components_dir={}, cache_ttl={}s, extension={}",
        components_dir.display(),
        config.cache_ttl_secs,
        config.doc_extension
    );

    match &cli.command {
        Command::Serve { .. } => serve(components_dir, &config).await,
        Command::List => {
            let service = ComponentService::from_config(components_dir, &config);
            let components = service.get_components_list().await?;
            println!("{}", format_component_list(&components));
            Ok(())
        }
        Command::Detail { name } => {
            let service = ComponentService::from_config(components_dir, &config);
            let content = service.get_component_detail(name).await?;
            println!("{content}");
            Ok(())
        }
    }
}

/// Starts the HTTP server and runs until Ctrl+C or SIGTERM.
async fn serve(components_dir: std::path::PathBuf, config: &Config) -> anyhow::Result<()> {
    info!("Starting MDC component server");

    let state = AppState::from_config(components_dir, config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
