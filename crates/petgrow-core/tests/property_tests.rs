//! # Property-Based Tests
//!
//! Invariants of stage resolution and progress, checked with proptest over
//! the built-in six-tier table and over randomly generated tables.

use petgrow_core::{StageDefinition, StageTable, resolve_index, resolve_stage, stage_progress};
use proptest::collection::vec;
use proptest::prelude::*;

/// Build a contiguous table from a floor and a list of stage widths.
fn table_from_widths(floor: i32, widths: &[u16]) -> StageTable {
    let mut stages = Vec::with_capacity(widths.len() + 1);
    let mut start = floor as f64;

    for (i, width) in widths.iter().enumerate() {
        let end = start + f64::from(*width);
        stages.push(StageDefinition::bounded(format!("s{}", i), start, end));
        start = end;
    }
    stages.push(StageDefinition::unbounded("top", start));

    StageTable::new(stages).expect("generated table is contiguous")
}

fn any_points() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1_000_000.0f64..1_000_000.0,
        (-500i64..1_000).prop_map(|p| p as f64),
        Just(f64::MAX),
        Just(f64::MIN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Any negative total shows an empty bar.
    #[test]
    fn negative_points_have_zero_progress(points in -1_000_000.0f64..0.0) {
        let table = StageTable::default();
        prop_assert_eq!(stage_progress(points, &table), 0.0);
        prop_assert_eq!(resolve_index(points, &table), 0);
    }

    /// Progress always lies in [0, 100].
    #[test]
    fn progress_is_clamped(points in any_points()) {
        let table = StageTable::default();
        let percent = stage_progress(points, &table);
        prop_assert!(!percent.is_nan());
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    /// Progress stays clamped for arbitrary valid tables.
    #[test]
    fn progress_is_clamped_for_any_table(
        floor in -1000i32..1000,
        widths in vec(1u16..500, 0..8),
        points in any_points()
    ) {
        let table = table_from_widths(floor, &widths);
        let percent = stage_progress(points, &table);
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    /// A higher total never lands in a lower stage.
    #[test]
    fn resolution_is_monotonic(
        floor in -1000i32..1000,
        widths in vec(1u16..500, 0..8),
        a in -5_000.0f64..5_000.0,
        b in -5_000.0f64..5_000.0
    ) {
        let table = table_from_widths(floor, &widths);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resolve_index(low, &table) <= resolve_index(high, &table));
    }

    /// Anything at or past the top floor is exactly 100.
    #[test]
    fn top_stage_is_always_full(excess in 0.0f64..1e12) {
        let table = StageTable::default();
        let points = 400.0 + excess;
        prop_assert_eq!(resolve_stage(points, &table).name.as_str(), "传说");
        prop_assert_eq!(stage_progress(points, &table), 100.0);
    }

    /// The resolved stage contains the points (or is the floor stage).
    #[test]
    fn resolved_stage_contains_points(
        floor in -1000i32..1000,
        widths in vec(1u16..500, 1..8),
        points in -5_000.0f64..5_000.0
    ) {
        let table = table_from_widths(floor, &widths);
        let stage = resolve_stage(points, &table);
        if points >= table.floor() {
            prop_assert!(stage.min_points <= points);
            if let Some(max) = stage.max_points.value() {
                prop_assert!(points < max);
            }
        } else {
            prop_assert_eq!(stage, table.first());
        }
    }

    /// Same input, bit-identical output.
    #[test]
    fn calculation_is_idempotent(points in any_points()) {
        let table = StageTable::default();

        let first = stage_progress(points, &table);
        let second = stage_progress(points, &table);
        prop_assert_eq!(first.to_bits(), second.to_bits());

        prop_assert_eq!(resolve_index(points, &table), resolve_index(points, &table));
    }
}
