//! Benchmarks for the diff engine.

use apidiff::{ApiBuilder, DiffEngine, IgnorePolicy, SymbolNode};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A surface with `types` classes of a few members each. `renamed` of the
/// classes get version-suffixed method names so the two generations
/// actually differ.
fn surface(types: usize, renamed: usize, generation: u32) -> SymbolNode {
    ApiBuilder::new("Bench")
        .namespace("Bench.Core", |mut ns| {
            for i in 0..types {
                let class = format!("Class{i}");
                let suffix = if i < renamed { generation } else { 0 };
                ns = ns.class(&class, |ty| {
                    ty.constructor(|c| c.parameter("System.Int32"))
                        .method(&format!("Get{suffix}"), |m| m.returns("System.Int32"))
                        .method("Set", |m| m.parameter("System.Int32"))
                        .property("Value", "System.Int32")
                        .field("count", "System.Int32")
                });
            }
            ns
        })
        .build()
}

fn benchmark_diff(c: &mut Criterion) {
    let engine = DiffEngine::new();
    let policy = IgnorePolicy::empty();

    let old = surface(500, 50, 1);
    let new = surface(500, 50, 2);
    c.bench_function("diff_500_types_50_changed", |b| {
        b.iter(|| {
            let report = engine
                .diff(black_box(&old), black_box(&new), &policy)
                .expect("diff");
            black_box(report)
        })
    });

    let identical = surface(500, 0, 1);
    c.bench_function("diff_identical_early_out", |b| {
        b.iter(|| {
            let report = engine
                .diff(black_box(&identical), black_box(&identical), &policy)
                .expect("diff");
            black_box(report)
        })
    });
}

fn benchmark_suppression(c: &mut Criterion) {
    let engine = DiffEngine::new();
    let old = surface(500, 500, 1);
    let new = surface(500, 500, 2);
    let entries: Vec<String> = (0..500).map(|i| format!("Bench.Core.Class{i}")).collect();
    let policy = IgnorePolicy::new(entries).expect("valid entries");

    c.bench_function("diff_500_types_all_ignored", |b| {
        b.iter(|| {
            let report = engine
                .diff(black_box(&old), black_box(&new), &policy)
                .expect("diff");
            black_box(report)
        })
    });
}

criterion_group!(benches, benchmark_diff, benchmark_suppression);
criterion_main!(benches);
