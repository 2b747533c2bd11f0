//! Storage Telemetry API Server
//!
//! HTTP interface for the storage telemetry dashboard: JSON endpoints to
//! populate, list, and delete records, plus a rendered HTML index.

use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod routes;
mod synthetic;

use storage::Repository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Storage repository
    pub repository: Repository,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/populate", get(routes::telemetry::populate))
        .route("/data", get(routes::telemetry::data))
        .route("/delete", delete(routes::telemetry::delete_all))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until shutdown is requested, then close the repository.
pub async fn run_server(addr: &str, repository: Repository) -> anyhow::Result<()> {
    let state = AppState {
        repository: repository.clone(),
    };
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repository.close().await;
    info!("Server stopped, database closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
