//! # PetGrow HTTP API Module
//!
//! This module implements the HTTP JSON API server using axum. The classroom
//! UI calls it to draw pets, progress bars and leaderboards.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /stages` - Stage table of the class
//! - `GET /stage?points=N` - Stage and progress for a point total
//! - `POST /leaderboard` - Rank a roster snapshot
//!
//! ## Configuration (Environment Variables)
//!
//! - `PETGROW_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `petgrow::api::*`)
#[allow(unused_imports)]
pub use handlers::{health_handler, leaderboard_handler, stage_handler, stages_handler};
#[allow(unused_imports)]
pub use types::{
    HealthResponse, LeaderboardRequest, LeaderboardResponse, StageJson, StageQuery,
    StageResponse, StagesResponse,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use petgrow_core::{ClassConfig, PetGrowError, StageTable};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (2 MiB).
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the class configuration and its validated table.
///
/// Both are read-only for the lifetime of the server, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClassConfig>,
    pub table: Arc<StageTable>,
}

impl AppState {
    /// Create app state, validating the stage table up front.
    pub fn new(config: ClassConfig) -> Result<Self, PetGrowError> {
        let table = config.table()?;
        Ok(Self::from_parts(config, table))
    }

    /// Create app state from a configuration whose table is already built.
    #[must_use]
    pub fn from_parts(config: ClassConfig, table: StageTable) -> Self {
        Self {
            config: Arc::new(config),
            table: Arc::new(table),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `PETGROW_CORS_ORIGINS`:
/// - If "*": allows all origins
/// - If not set: defaults to localhost only
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("PETGROW_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (PETGROW_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in PETGROW_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => {
            tracing::info!("CORS: No PETGROW_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner): tracing, CORS, body limit.
pub fn create_router(state: AppState) -> Router {
    tracing::info!(
        class = %state.config.class_name,
        stages = state.table.len(),
        "Building router"
    );

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/stages", get(handlers::stages_handler))
        .route("/stage", get(handlers::stage_handler))
        .route("/leaderboard", post(handlers::leaderboard_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer())
                .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), PetGrowError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PetGrowError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("PetGrow HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PetGrowError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
