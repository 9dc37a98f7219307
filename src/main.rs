//! Fronter Backend
//!
//! Renders the current fronters of a PluralKit system as HTML pages.

mod api;
mod config;
mod errors;
mod markdown;
mod models;
mod pages;
mod pluralkit;
mod templates;
mod view;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use pluralkit::PluralKitClient;
use templates::Templates;

/// Application state shared across all handlers.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Templates>,
    pub pluralkit: PluralKitClient,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fronter Backend");
    tracing::info!("API base: {}", config.api_base);
    tracing::info!("Default system: {}", config.default_system);
    tracing::info!("Template dir: {:?}", config.template_dir);
    tracing::info!("Static dir: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    let templates = Arc::new(Templates::load(&config.template_dir)?);
    let pluralkit = PluralKitClient::new(&config.api_base, config.http_timeout)?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        templates,
        pluralkit,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(api::home))
        .route("/us", get(api::home))
        .route("/sys/", get(api::system_page_without_id))
        .route("/sys/{system}", get(api::system_page))
        .route("/simple/", get(api::simple_page_without_id))
        .route("/simple/{system}", get(api::simple_page))
        .route("/health", get(health_check))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
}
