//! # Stage Benchmarks
//!
//! Performance benchmarks for stage resolution and leaderboard ranking.
//!
//! Run with: `cargo bench -p petgrow-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use petgrow_core::{Leaderboard, Member, StageDefinition, StageTable, stage_progress};
use std::hint::black_box;

/// Create a contiguous table with `size` stages of width 10.
fn create_table(size: usize) -> StageTable {
    let mut stages: Vec<StageDefinition> = (0..size.saturating_sub(1))
        .map(|i| StageDefinition::bounded(format!("s{}", i), i as f64 * 10.0, (i + 1) as f64 * 10.0))
        .collect();
    stages.push(StageDefinition::unbounded(
        "top",
        size.saturating_sub(1) as f64 * 10.0,
    ));
    StageTable::new(stages).expect("table")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_stage_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_progress");

    for size in [6, 64, 1024].iter() {
        let table = create_table(*size);
        let points = (*size as f64) * 5.0;
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(stage_progress(black_box(points), table)));
        });
    }

    group.finish();
}

fn bench_leaderboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard_rank");
    let table = StageTable::default();

    for size in [30, 300, 3000].iter() {
        let members: Vec<Member> = (0..*size)
            .map(|i| Member::student(format!("student-{}", i), ((i * 37) % 500) as f64))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &members, |b, members| {
            b.iter(|| black_box(Leaderboard::rank(members, &table)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stage_progress, bench_leaderboard);
criterion_main!(benches);
