//! # Leaderboard
//!
//! Ranks students or groups by points and attaches each one's pet stage.
//!
//! Ranking uses standard competition order: equal point totals share a rank
//! and the following rank is skipped (1, 1, 3). Ties are listed by name.

use crate::{MemberKind, PetGrowError, StageTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum number of members accepted in one roster.
pub const MAX_ROSTER_SIZE: usize = 10_000;

/// One point ledger, as supplied by the points service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: MemberKind,
    pub points: f64,
}

fn default_kind() -> MemberKind {
    MemberKind::Student
}

impl Member {
    #[must_use]
    pub fn student(name: impl Into<String>, points: f64) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Student,
            points,
        }
    }

    #[must_use]
    pub fn group(name: impl Into<String>, points: f64) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Group,
            points,
        }
    }
}

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub kind: MemberKind,
    pub points: f64,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub percent: f64,
}

/// Ranked view over a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank `members` against `table`.
    ///
    /// Rejects blank names and non-finite point totals.
    pub fn rank(members: &[Member], table: &StageTable) -> Result<Self, PetGrowError> {
        validate_roster(members)?;

        let mut sorted: Vec<&Member> = members.iter().collect();
        sorted.sort_by(|a, b| compare_members(a, b));

        let mut entries = Vec::with_capacity(sorted.len());
        let mut rank = 0;
        let mut previous: Option<f64> = None;

        for (position, member) in sorted.into_iter().enumerate() {
            if previous != Some(member.points) {
                rank = position.saturating_add(1);
                previous = Some(member.points);
            }

            let stage = table.resolve(member.points);
            entries.push(LeaderboardEntry {
                rank,
                name: member.name.clone(),
                kind: member.kind,
                points: member.points,
                stage: stage.name.clone(),
                emoji: stage.emoji.clone(),
                percent: table.progress(member.points),
            });
        }

        Ok(Self { entries })
    }

    /// Keep only one kind of member. Ranks are left as computed.
    #[must_use]
    pub fn filter_kind(self, kind: MemberKind) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|e| e.kind == kind)
                .collect(),
        }
    }

    /// Keep the first `n` rows.
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check a roster before ranking.
pub fn validate_roster(members: &[Member]) -> Result<(), PetGrowError> {
    if members.len() > MAX_ROSTER_SIZE {
        return Err(PetGrowError::InvalidRoster(format!(
            "roster size {} exceeds maximum {}",
            members.len(),
            MAX_ROSTER_SIZE
        )));
    }
    for member in members {
        if member.name.trim().is_empty() {
            return Err(PetGrowError::InvalidRoster(
                "member name must not be empty".to_string(),
            ));
        }
        if !member.points.is_finite() {
            return Err(PetGrowError::InvalidRoster(format!(
                "member '{}' has non-finite points",
                member.name
            )));
        }
    }
    Ok(())
}

/// Points descending, then name ascending.
fn compare_members(a: &Member, b: &Member) -> Ordering {
    b.points
        .total_cmp(&a.points)
        .then_with(|| a.name.cmp(&b.name))
}

// =============================================================================
// TESTS
// =============================================================================
