//! # Stage Calculation
//!
//! Maps a point total onto a growth stage and a progress percentage within it.
//!
//! ## Resolution Rule
//!
//! Stages are half-open ranges `[min_points, next.min_points)`, with the top
//! stage open-ended:
//!
//! - `points` below the table floor shows the lowest stage (floor clamp).
//! - Otherwise the highest stage whose `min_points <= points` wins, so a score
//!   exactly on a boundary belongs to the *upper* stage.
//!
//! ## Progress Rule
//!
//! | Situation | Percent |
//! |-----------|---------|
//! | Top (unbounded) stage | exactly 100 |
//! | Below the stage floor (floor clamp) | exactly 0 |
//! | Otherwise | `(points - min) * 100 / (max - min)`, clamped to `[0, 100]` |
//!
//! The result is never negative and never NaN. Negative point totals used to
//! yield a negative percentage that renderers drew as a full bar.
//!
//! All functions here are pure: no state, no caching, no I/O.

use crate::{StageDefinition, StageTable};
use serde::{Deserialize, Serialize};

/// Lowest progress value.
pub const PROGRESS_MIN: f64 = 0.0;

/// Highest progress value; also the fixed value for the top stage.
pub const PROGRESS_MAX: f64 = 100.0;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Index of the stage that applies to `points`.
#[must_use]
pub fn resolve_index(points: f64, table: &StageTable) -> usize {
    if points < table.floor() {
        return 0;
    }

    // NaN matches no floor and falls through to the lowest stage.
    table
        .stages()
        .iter()
        .rposition(|stage| stage.min_points <= points)
        .unwrap_or(0)
}

/// Stage that applies to `points`.
#[must_use]
pub fn resolve_stage(points: f64, table: &StageTable) -> &StageDefinition {
    table
        .get(resolve_index(points, table))
        .unwrap_or_else(|| table.first())
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Progress through the current stage, in `[0, 100]`.
#[must_use]
pub fn stage_progress(points: f64, table: &StageTable) -> f64 {
    if points.is_nan() {
        return PROGRESS_MIN;
    }

    let stage = resolve_stage(points, table);
    progress_within(points, stage)
}

fn progress_within(points: f64, stage: &StageDefinition) -> f64 {
    let Some(max) = stage.max_points.value() else {
        return PROGRESS_MAX;
    };

    if points < stage.min_points {
        return PROGRESS_MIN;
    }

    // Multiply before dividing so whole-number inputs stay exact.
    let span = max - stage.min_points;
    let scaled = (points - stage.min_points) * PROGRESS_MAX;
    let percent = if scaled.is_finite() && span.is_finite() {
        scaled / span
    } else {
        // Bounds near f64::MAX: halve every term so no difference overflows.
        let half_offset = points / 2.0 - stage.min_points / 2.0;
        let half_span = max / 2.0 - stage.min_points / 2.0;
        half_offset / half_span * PROGRESS_MAX
    };
    if percent.is_nan() {
        return PROGRESS_MIN;
    }
    percent.clamp(PROGRESS_MIN, PROGRESS_MAX)
}

// =============================================================================
// STAGE REPORT
// =============================================================================

/// Everything a renderer needs to draw one pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageProgress {
    /// The point total this report was computed for.
    pub points: f64,
    /// Position of `stage` in the table.
    pub index: usize,
    pub stage: StageDefinition,
    /// Following stage, `None` on the top tier.
    pub next: Option<StageDefinition>,
    /// Progress through `stage`, in `[0, 100]`.
    pub percent: f64,
    /// Points still missing to reach `next`.
    pub points_to_next: Option<f64>,
}

impl StageProgress {
    /// Check if the top stage has been reached.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}

/// Build the full stage report for `points`.
#[must_use]
pub fn assess(points: f64, table: &StageTable) -> StageProgress {
    let index = resolve_index(points, table);
    let stage = table.get(index).unwrap_or_else(|| table.first()).clone();
    let next = table.get(index.saturating_add(1)).cloned();
    let points_to_next = next
        .as_ref()
        .filter(|_| !points.is_nan())
        .map(|n| (n.min_points - points).max(0.0));

    StageProgress {
        points,
        index,
        percent: stage_progress(points, table),
        stage,
        next,
        points_to_next,
    }
}

// =============================================================================
// TABLE SHORTCUTS
// =============================================================================

impl StageTable {
    /// Shortcut for [`resolve_stage`].
    #[must_use]
    pub fn resolve(&self, points: f64) -> &StageDefinition {
        resolve_stage(points, self)
    }

    /// Shortcut for [`stage_progress`].
    #[must_use]
    pub fn progress(&self, points: f64) -> f64 {
        stage_progress(points, self)
    }

    /// Shortcut for [`assess`].
    #[must_use]
    pub fn assess(&self, points: f64) -> StageProgress {
        assess(points, self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
