//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use petgrow_core::{Leaderboard, LeaderboardEntry, Member, MemberKind, StageDefinition, StageProgress};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STAGES RESPONSE
// =============================================================================

/// Configured stage table for the class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagesResponse {
    pub class_name: String,
    pub custom: bool,
    pub stages: Vec<StageDefinition>,
}

// =============================================================================
// STAGE QUERY/RESPONSE
// =============================================================================

/// Query string of `GET /stage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageQuery {
    pub points: f64,
}

/// Stage of one pet, flattened for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageJson {
    pub points: f64,
    pub index: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Width of the progress bar, in `[0, 100]`. Renderers draw it as is.
    pub progress_percent: f64,
    pub next_stage: Option<String>,
    pub points_to_next: Option<f64>,
}

impl From<StageProgress> for StageJson {
    fn from(report: StageProgress) -> Self {
        Self {
            points: report.points,
            index: report.index,
            name: report.stage.name,
            emoji: report.stage.emoji,
            image_ref: report.stage.image_ref,
            progress_percent: report.percent,
            next_stage: report.next.map(|s| s.name),
            points_to_next: report.points_to_next,
        }
    }
}

/// Stage response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResponse {
    pub success: bool,
    pub stage: Option<StageJson>,
    pub error: Option<String>,
}

impl StageResponse {
    pub fn success(report: StageProgress) -> Self {
        Self {
            success: true,
            stage: Some(report.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            stage: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// LEADERBOARD REQUEST/RESPONSE
// =============================================================================

/// Leaderboard request: a roster snapshot from the points service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRequest {
    pub members: Vec<Member>,
    /// Only rank students or only groups.
    #[serde(default)]
    pub kind: Option<MemberKind>,
    /// Keep the first N rows.
    #[serde(default)]
    pub top: Option<usize>,
}

/// Leaderboard response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub entries: Vec<LeaderboardEntry>,
    pub error: Option<String>,
}

impl LeaderboardResponse {
    pub fn success(board: Leaderboard) -> Self {
        Self {
            success: true,
            entries: board.entries,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            entries: vec![],
            error: Some(msg.into()),
        }
    }
}
