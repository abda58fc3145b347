//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        HealthResponse, LeaderboardRequest, LeaderboardResponse, StageQuery, StageResponse,
        StagesResponse,
    },
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use petgrow_core::{Leaderboard, assess};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STAGES HANDLER
// =============================================================================

/// List the class stage table.
pub async fn stages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = StagesResponse {
        class_name: state.config.class_name.clone(),
        custom: state.config.has_custom_stages(),
        stages: state.table.stages().to_vec(),
    };

    (StatusCode::OK, Json(response))
}

// =============================================================================
// STAGE HANDLER
// =============================================================================

/// Resolve the stage and progress for a point total.
pub async fn stage_handler(
    State(state): State<AppState>,
    query: Result<Query<StageQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(StageResponse::error(format!("Invalid query: {}", e))),
            );
        }
    };

    if !query.points.is_finite() {
        return (
            StatusCode::BAD_REQUEST,
            Json(StageResponse::error("points must be a finite number")),
        );
    }

    let report = assess(query.points, &state.table);
    tracing::debug!(
        points = query.points,
        stage = %report.stage.name,
        percent = report.percent,
        "stage resolved"
    );

    (StatusCode::OK, Json(StageResponse::success(report)))
}

// =============================================================================
// LEADERBOARD HANDLER
// =============================================================================

/// Rank a roster snapshot.
pub async fn leaderboard_handler(
    State(state): State<AppState>,
    request: Result<Json<LeaderboardRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(LeaderboardResponse::error(format!("Invalid request: {}", e))),
            );
        }
    };

    let board = match Leaderboard::rank(&request.members, &state.table) {
        Ok(b) => b,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(LeaderboardResponse::error(e.to_string())),
            );
        }
    };

    let board = match request.kind {
        Some(kind) => board.filter_kind(kind),
        None => board,
    };
    let board = match request.top {
        Some(n) => board.top(n),
        None => board,
    };

    (StatusCode::OK, Json(LeaderboardResponse::success(board)))
}
