//! # Stage Table
//!
//! An ordered, validated list of `StageDefinition`s.
//!
//! A `StageTable` can only be built through [`StageTable::new`], which checks
//! the table invariant once, at load time:
//!
//! | Rule | Error |
//! |------|-------|
//! | At least one stage | `EmptyStageTable` |
//! | Names non-empty and unique | `EmptyStageName`, `DuplicateStageName` |
//! | All bounds finite | `NonFiniteBound` |
//! | Bounded stages end above their start | `InvertedBounds` |
//! | Each stage starts where the previous ends | `NonContiguous` |
//! | Only the last stage is unbounded | `UnboundedNotLast`, `BoundedTopStage` |
//!
//! Every calculation in [`crate::system`] takes a `&StageTable`, so none of
//! them has an error path.

use crate::{PetGrowError, StageDefinition, UpperBound};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Validated, immutable stage table.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTable {
    stages: Vec<StageDefinition>,
}

impl StageTable {
    /// Validate and build a table.
    pub fn new(stages: Vec<StageDefinition>) -> Result<Self, PetGrowError> {
        validate(&stages)?;
        Ok(Self { stages })
    }

    /// All stages, ascending by `min_points`.
    #[must_use]
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    /// Number of stages (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the table has no stages. A validated table always has one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Get the stage at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StageDefinition> {
        self.stages.get(index)
    }

    /// Lowest stage. Below-range scores are shown as this stage.
    #[must_use]
    pub fn first(&self) -> &StageDefinition {
        // Non-empty: checked in `new`.
        &self.stages[0]
    }

    /// The open-ended top stage.
    #[must_use]
    pub fn last(&self) -> &StageDefinition {
        &self.stages[self.stages.len() - 1]
    }

    /// Global point floor of the table.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.first().min_points
    }

    /// Find a stage index by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.name == name)
    }

    /// Iterate over the stages.
    pub fn iter(&self) -> std::slice::Iter<'_, StageDefinition> {
        self.stages.iter()
    }
}

impl Default for StageTable {
    /// The built-in six-tier pet table.
    fn default() -> Self {
        Self {
            stages: default_stages(),
        }
    }
}

impl<'a> IntoIterator for &'a StageTable {
    type Item = &'a StageDefinition;
    type IntoIter = std::slice::Iter<'a, StageDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

impl Serialize for StageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.stages.serialize(serializer)
    }
}

/// Stages used when a class has no custom table.
#[must_use]
pub fn default_stages() -> Vec<StageDefinition> {
    vec![
        StageDefinition::bounded("蛋", 0.0, 20.0).with_emoji("🥚"),
        StageDefinition::bounded("幼崽", 20.0, 50.0).with_emoji("🐣"),
        StageDefinition::bounded("成长", 50.0, 100.0).with_emoji("🐥"),
        StageDefinition::bounded("成熟", 100.0, 200.0).with_emoji("🐔"),
        StageDefinition::bounded("进化", 200.0, 400.0).with_emoji("🦅"),
        StageDefinition::unbounded("传说", 400.0).with_emoji("🐉"),
    ]
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate(stages: &[StageDefinition]) -> Result<(), PetGrowError> {
    if stages.is_empty() {
        return Err(PetGrowError::EmptyStageTable);
    }

    let mut names = BTreeSet::new();
    let last_index = stages.len() - 1;
    let mut previous_max: Option<f64> = None;

    for (i, stage) in stages.iter().enumerate() {
        if stage.name.trim().is_empty() {
            return Err(PetGrowError::EmptyStageName(i));
        }
        if !names.insert(stage.name.as_str()) {
            return Err(PetGrowError::DuplicateStageName(stage.name.clone()));
        }
        if !stage.min_points.is_finite() {
            return Err(PetGrowError::NonFiniteBound(stage.name.clone()));
        }

        if let Some(expected) = previous_max {
            if stage.min_points != expected {
                return Err(PetGrowError::NonContiguous {
                    stage: stage.name.clone(),
                    expected,
                    found: stage.min_points,
                });
            }
        }

        match stage.max_points {
            UpperBound::Bounded(max) => {
                if !max.is_finite() {
                    return Err(PetGrowError::NonFiniteBound(stage.name.clone()));
                }
                if max <= stage.min_points {
                    return Err(PetGrowError::InvertedBounds {
                        stage: stage.name.clone(),
                        min: stage.min_points,
                        max,
                    });
                }
                if i == last_index {
                    return Err(PetGrowError::BoundedTopStage(stage.name.clone()));
                }
                previous_max = Some(max);
            }
            UpperBound::Unbounded => {
                if i != last_index {
                    return Err(PetGrowError::UnboundedNotLast(stage.name.clone()));
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let table = StageTable::new(default_stages()).expect("valid");
        assert_eq!(table, StageTable::default());
        assert_eq!(table.len(), 6);
        assert_eq!(table.floor(), 0.0);
        assert_eq!(table.first().name, "蛋");
        assert_eq!(table.last().name, "传说");
        assert!(table.last().max_points.is_unbounded());
    }

    #[test]
    fn single_unbounded_stage_is_valid() {
        let table = StageTable::new(vec![StageDefinition::unbounded("only", -10.0)]).expect("valid");
        assert_eq!(table.floor(), -10.0);
        assert_eq!(table.first(), table.last());
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            StageTable::new(Vec::new()),
            Err(PetGrowError::EmptyStageTable)
        ));
    }

    #[test]
    fn gap_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 0.0, 10.0),
            StageDefinition::unbounded("b", 12.0),
        ]);
        assert!(matches!(
            result,
            Err(PetGrowError::NonContiguous { expected, found, .. }) if expected == 10.0 && found == 12.0
        ));
    }

    #[test]
    fn overlap_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 0.0, 10.0),
            StageDefinition::unbounded("b", 5.0),
        ]);
        assert!(matches!(result, Err(PetGrowError::NonContiguous { .. })));
    }

    #[test]
    fn bounded_top_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 0.0, 10.0),
            StageDefinition::bounded("b", 10.0, 20.0),
        ]);
        assert!(matches!(result, Err(PetGrowError::BoundedTopStage(name)) if name == "b"));
    }

    #[test]
    fn unbounded_middle_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::unbounded("a", 0.0),
            StageDefinition::unbounded("b", 10.0),
        ]);
        assert!(matches!(result, Err(PetGrowError::UnboundedNotLast(name)) if name == "a"));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 10.0, 10.0),
            StageDefinition::unbounded("b", 10.0),
        ]);
        assert!(matches!(result, Err(PetGrowError::InvertedBounds { .. })));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 0.0, f64::INFINITY),
            StageDefinition::unbounded("b", f64::INFINITY),
        ]);
        assert!(matches!(result, Err(PetGrowError::NonFiniteBound(_))));

        let result = StageTable::new(vec![StageDefinition::unbounded("a", f64::NAN)]);
        assert!(matches!(result, Err(PetGrowError::NonFiniteBound(_))));
    }

    #[test]
    fn duplicate_and_blank_names_rejected() {
        let result = StageTable::new(vec![
            StageDefinition::bounded("a", 0.0, 10.0),
            StageDefinition::unbounded("a", 10.0),
        ]);
        assert!(matches!(result, Err(PetGrowError::DuplicateStageName(_))));

        let result = StageTable::new(vec![StageDefinition::unbounded("  ", 0.0)]);
        assert!(matches!(result, Err(PetGrowError::EmptyStageName(0))));
    }

    #[test]
    fn index_of_finds_stage() {
        let table = StageTable::default();
        assert_eq!(table.index_of("成长"), Some(2));
        assert_eq!(table.index_of("missing"), None);
    }
}
