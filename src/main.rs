//! Portal AI server binary.

use std::sync::Arc;

use portal_ai::adapters::ai::OpenAIThreadProvider;
use portal_ai::adapters::http::{app_router, ThreadsAppState};
use portal_ai::config::{AppConfig, ValidationError};
use portal_ai::ports::{ThreadProvider, ThreadProviderError};
use portal_ai::telemetry::init_tracing;
use thiserror::Error;
use tokio::net::TcpListener;

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build assistant client: {0}")]
    Provider(#[from] ThreadProviderError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(&config.server);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server stopped with error");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;

    let provider: Arc<dyn ThreadProvider> =
        Arc::new(OpenAIThreadProvider::new(config.ai.openai_config()?)?);
    let app = app_router(ThreadsAppState::new(provider), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        environment = ?config.server.environment,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
