//! # Growth Scenarios
//!
//! Fixed point totals against the built-in six-tier pet table:
//!
//! | Stage | Range |
//! |-------|-------|
//! | 蛋 | [0, 20) |
//! | 幼崽 | [20, 50) |
//! | 成长 | [50, 100) |
//! | 成熟 | [100, 200) |
//! | 进化 | [200, 400) |
//! | 传说 | [400, ∞) |

use petgrow_core::{ClassConfig, StageTable, assess, resolve_stage, stage_progress};

fn check(points: f64, stage: &str, percent: f64) {
    let table = StageTable::default();
    assert_eq!(
        resolve_stage(points, &table).name,
        stage,
        "stage for {} points",
        points
    );
    assert_eq!(
        stage_progress(points, &table),
        percent,
        "progress for {} points",
        points
    );
}

// =============================================================================
// BELOW THE FLOOR
// =============================================================================

mod below_floor {
    use super::*;

    #[test]
    fn large_deduction_shows_empty_egg() {
        check(-100.0, "蛋", 0.0);
    }

    #[test]
    fn single_point_deduction_shows_empty_egg() {
        check(-1.0, "蛋", 0.0);
    }

    #[test]
    fn fractional_deduction_shows_empty_egg() {
        check(-0.5, "蛋", 0.0);
    }
}

// =============================================================================
// INSIDE A STAGE
// =============================================================================

mod inside_stage {
    use super::*;

    #[test]
    fn zero_points_is_fresh_egg() {
        check(0.0, "蛋", 0.0);
    }

    #[test]
    fn halfway_through_egg() {
        check(10.0, "蛋", 50.0);
    }

    #[test]
    fn one_short_of_adult() {
        check(99.0, "成长", 98.0);
    }

    #[test]
    fn fractional_points() {
        check(150.5, "成熟", 50.5);
    }
}

// =============================================================================
// BOUNDARIES
// =============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn exact_boundary_moves_to_next_stage() {
        check(20.0, "幼崽", 0.0);
        check(50.0, "成长", 0.0);
        check(100.0, "成熟", 0.0);
        check(200.0, "进化", 0.0);
    }

    #[test]
    fn just_below_boundary_stays() {
        let table = StageTable::default();
        assert_eq!(resolve_stage(19.999, &table).name, "蛋");
        assert!(stage_progress(19.999, &table) < 100.0);
    }
}

// =============================================================================
// TOP STAGE
// =============================================================================

mod top_stage {
    use super::*;

    #[test]
    fn entering_legend_is_full() {
        check(400.0, "传说", 100.0);
    }

    #[test]
    fn far_past_legend_is_full() {
        check(1_000_000.0, "传说", 100.0);
    }

    #[test]
    fn report_has_no_next_stage() {
        let report = assess(1_000_000.0, &StageTable::default());
        assert!(report.is_terminal());
        assert_eq!(report.index, 5);
        assert_eq!(report.points_to_next, None);
    }
}

// =============================================================================
// CONFIGURED TABLES
// =============================================================================

mod configured {
    use super::*;

    #[test]
    fn custom_class_table_drives_calculation() {
        let config = ClassConfig::from_toml_str(
            r#"
            class_name = "robotics club"

            [[stages]]
            name = "bolt"
            min_points = -10
            max_points = 10

            [[stages]]
            name = "gear"
            min_points = 10
            max_points = "unbounded"
            "#,
        )
        .expect("parse");
        let table = config.table().expect("valid");

        assert_eq!(table.resolve(-20.0).name, "bolt");
        assert_eq!(table.progress(-20.0), 0.0);
        assert_eq!(table.progress(0.0), 50.0);
        assert_eq!(table.resolve(10.0).name, "gear");
        assert_eq!(table.progress(10.0), 100.0);
    }

    #[test]
    fn report_counts_points_to_next() {
        let report = assess(-5.0, &StageTable::default());
        assert_eq!(report.stage.name, "蛋");
        assert_eq!(report.percent, 0.0);
        assert_eq!(report.points_to_next, Some(25.0));
    }
}
