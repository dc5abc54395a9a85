//! # rosterd — roster daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, environment variable overrides)
//! - Initialize the JSON document store (seeding an empty collection)
//! - Construct the user service, injecting the store via its port trait
//! - Build the axum router, injecting the user service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use roster_adapter_http_axum::state::AppState;
use roster_app::services::user_service::UserService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let config = Config::load()?;

    // Logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let store = roster_adapter_storage_json::Config {
        path: PathBuf::from(config.storage_path()),
    }
    .build()
    .await?;
    tracing::info!(path = config.storage_path(), "storage ready");

    // Services
    let user_service = UserService::new(store);

    // HTTP
    let state = AppState::new(user_service);
    let app = roster_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "rosterd listening");

    #[cfg(unix)]
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    let shutdown = async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }

        #[cfg(not(unix))]
        let _ = ctrl_c.await;

        tracing::info!("shutdown signal received");
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
