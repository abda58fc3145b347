//! # Core Type Definitions
//!
//! This module contains the data model shared by every PetGrow component:
//! - Stage description (`StageDefinition`, `UpperBound`)
//! - Leaderboard participants (`MemberKind`)
//! - Error types (`PetGrowError`)
//!
//! ## The Unbounded Sentinel
//!
//! The top stage of a table has no upper point limit. This is modelled as the
//! explicit `UpperBound::Unbounded` variant rather than `f64::INFINITY`, so the
//! serialized form stays unambiguous: a number, or the keyword `"unbounded"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Keyword used for `UpperBound::Unbounded` in TOML and JSON.
pub const UNBOUNDED_KEYWORD: &str = "unbounded";

// =============================================================================
// UPPER BOUND
// =============================================================================

/// Upper point limit of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBound", into = "RawBound")]
pub enum UpperBound {
    /// The stage ends at this many points (the next stage starts here).
    Bounded(f64),
    /// The stage never ends. Only valid for the last stage of a table.
    #[default]
    Unbounded,
}

impl UpperBound {
    /// Get the numeric limit, if any.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            UpperBound::Bounded(max) => Some(*max),
            UpperBound::Unbounded => None,
        }
    }

    /// Check if this is the unbounded sentinel.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, UpperBound::Unbounded)
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Bounded(max) => write!(f, "{}", max),
            UpperBound::Unbounded => write!(f, "∞"),
        }
    }
}

/// Wire form of `UpperBound`: a bare number or the `"unbounded"` keyword.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawBound {
    Number(f64),
    Keyword(String),
}

impl TryFrom<RawBound> for UpperBound {
    type Error = String;

    fn try_from(raw: RawBound) -> Result<Self, Self::Error> {
        match raw {
            RawBound::Number(max) => Ok(UpperBound::Bounded(max)),
            RawBound::Keyword(word) if word.eq_ignore_ascii_case(UNBOUNDED_KEYWORD) => {
                Ok(UpperBound::Unbounded)
            }
            RawBound::Keyword(word) => Err(format!(
                "expected a number or \"{}\", found \"{}\"",
                UNBOUNDED_KEYWORD, word
            )),
        }
    }
}

impl From<UpperBound> for RawBound {
    fn from(bound: UpperBound) -> Self {
        match bound {
            UpperBound::Bounded(max) => RawBound::Number(max),
            UpperBound::Unbounded => RawBound::Keyword(UNBOUNDED_KEYWORD.to_string()),
        }
    }
}

// =============================================================================
// STAGE DEFINITION
// =============================================================================

/// One growth tier of the class pet.
///
/// A stage covers the half-open range `[min_points, max_points)`. The
/// display assets (`emoji`, `image_ref`) are carried through untouched and
/// play no part in any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDefinition {
    /// Display label, unique within a table.
    pub name: String,
    /// Inclusive lower bound.
    pub min_points: f64,
    /// Upper bound, or the unbounded sentinel for the top tier.
    #[serde(default)]
    pub max_points: UpperBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl StageDefinition {
    /// Create a stage with a finite upper bound.
    #[must_use]
    pub fn bounded(name: impl Into<String>, min_points: f64, max_points: f64) -> Self {
        Self {
            name: name.into(),
            min_points,
            max_points: UpperBound::Bounded(max_points),
            emoji: None,
            image_ref: None,
        }
    }

    /// Create an open-ended top stage.
    #[must_use]
    pub fn unbounded(name: impl Into<String>, min_points: f64) -> Self {
        Self {
            name: name.into(),
            min_points,
            max_points: UpperBound::Unbounded,
            emoji: None,
            image_ref: None,
        }
    }

    /// Attach a display emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Attach a display image reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Width of the stage in points, `None` for the unbounded top tier.
    #[must_use]
    pub fn span(&self) -> Option<f64> {
        self.max_points.value().map(|max| max - self.min_points)
    }
}

impl fmt::Display for StageDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.emoji {
            Some(emoji) => write!(
                f,
                "{} {} [{}, {})",
                emoji, self.name, self.min_points, self.max_points
            ),
            None => write!(f, "{} [{}, {})", self.name, self.min_points, self.max_points),
        }
    }
}

// =============================================================================
// MEMBER KIND
// =============================================================================

/// Whether a point ledger belongs to a single student or to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Student,
    Group,
}

impl MemberKind {
    /// Get the lowercase label used in files and on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Student => "student",
            MemberKind::Group => "group",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemberKind {
    type Err = PetGrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(MemberKind::Student),
            "group" => Ok(MemberKind::Group),
            other => Err(PetGrowError::InvalidRoster(format!(
                "unknown member kind '{}'",
                other
            ))),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the PetGrow system.
///
/// Calculations on a validated `StageTable` never fail. Every variant here
/// belongs to loading or validating input: stage configuration, rosters and
/// the files they come from.
#[derive(Debug, Error)]
pub enum PetGrowError {
    /// The stage table has no stages.
    #[error("Stage table is empty")]
    EmptyStageTable,

    /// A stage has a blank name.
    #[error("Stage #{0} has an empty name")]
    EmptyStageName(usize),

    /// Two stages share a name.
    #[error("Duplicate stage name: {0}")]
    DuplicateStageName(String),

    /// A stage bound is NaN or infinite.
    #[error("Stage '{0}' has a non-finite bound")]
    NonFiniteBound(String),

    /// A bounded stage does not end above where it starts.
    #[error("Stage '{stage}' ends at {max} which is not above its start {min}")]
    InvertedBounds { stage: String, min: f64, max: f64 },

    /// A stage does not start where the previous one ends.
    #[error("Stage '{stage}' starts at {found} but the previous stage ends at {expected}")]
    NonContiguous {
        stage: String,
        expected: f64,
        found: f64,
    },

    /// A stage other than the last has no upper bound.
    #[error("Stage '{0}' is unbounded but is not the last stage")]
    UnboundedNotLast(String),

    /// The last stage has an upper bound.
    #[error("Last stage '{0}' must be unbounded")]
    BoundedTopStage(String),

    /// Configuration text could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A roster entry is malformed.
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
