//! VenueHub Server: venues, catalogs, and items behind cookie sessions.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use venuehub_api::{AppState, build_router};
use venuehub_core::config::AppConfig;
use venuehub_core::error::AppError;
use venuehub_database::Store;

#[tokio::main]
async fn main() {
    let env = std::env::var("VENUEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VenueHub v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_placeholder_secret() {
        tracing::warn!("auth.jwt_secret is the built-in placeholder; set VENUEHUB__AUTH__JWT_SECRET");
    }

    // ── Step 1: Store backend + migrations ───────────────────────
    let store = Store::connect(&config).await?;

    // ── Step 2: Auth components and services ─────────────────────
    let bootstrap_admin = config.auth.bootstrap_admin.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store.clone())?;

    // ── Step 3: Elevated account ─────────────────────────────────
    if let Some(admin) = bootstrap_admin {
        state.accounts.ensure_bootstrap_admin(&admin).await?;
    }

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VenueHub server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    tracing::info!("Shutting down store");
    store.close().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
