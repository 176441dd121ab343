//! Benchmarks for curve_builder.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_builder::{ChainedCurveBuilder, CurveBuildEngine, ExogenousBundles};
use curve_core::config::{
    CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration,
};
use curve_core::source::{
    InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource, MarketDataSnapshot,
    ResolutionContext,
};
use curve_core::types::VersionCorrection;

/// One configuration per entry of `sizes`, each with that many curves.
///
/// Configuration `i` depends on configuration `i - 1` when `chained`; only
/// the first configuration of a chain discounts USD.
fn generate_store(sizes: &[usize], chained: bool) -> (Vec<String>, ResolutionContext) {
    let mut configs = InMemoryConfigSource::new();
    let mut snapshot = MarketDataSnapshot::new();
    let mut names = Vec::new();

    for (i, size) in sizes.iter().enumerate() {
        let name = format!("CFG-{i}");
        let mut group = CurveGroupConfiguration::new();
        for j in 0..*size {
            let curve = format!("CFG-{i}-CURVE-{j}");
            snapshot.insert(curve.clone(), 0.03 + (j as f64) * 0.0001);
            let types = if j == 0 && (i == 0 || !chained) {
                vec![CurveTypeConfiguration::discounting("USD")]
            } else {
                vec![]
            };
            group = group.with_curve(curve, types);
        }
        let mut config = CurveConstructionConfiguration::new(name.clone(), vec![group]);
        if chained && i > 0 {
            config = config.with_exogenous([format!("CFG-{}", i - 1)]);
        }
        configs.add(config);
        names.push(name);
    }

    let context = ResolutionContext::in_memory(
        configs,
        InMemorySecuritySource::new(),
        InMemoryConventionSource::new(),
        snapshot,
    );
    (names, context)
}

fn benchmark_single_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_build");

    for size in [10, 50, 200] {
        let (names, context) = generate_store(&[size], false);
        let engine = CurveBuildEngine::new(context);
        let exogenous = ExogenousBundles::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), &names[0], |b, name| {
            b.iter(|| engine.build(black_box(name), VersionCorrection::LATEST, &exogenous))
        });
    }

    group.finish();
}

fn benchmark_build_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_batch");

    for batch_size in [4, 16, 64] {
        let (names, context) = generate_store(&vec![20; batch_size], false);
        let engine = CurveBuildEngine::new(context);
        let exogenous = ExogenousBundles::new();

        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &names, |b, names| {
            b.iter(|| engine.build_batch(black_box(names), VersionCorrection::LATEST, &exogenous))
        });
    }

    group.finish();
}

fn benchmark_chained_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_build");

    for depth in [2, 8, 32] {
        let (names, context) = generate_store(&vec![5; depth], true);
        let builder = ChainedCurveBuilder::new(CurveBuildEngine::new(context));
        let top = names[depth - 1].clone();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &top, |b, name| {
            b.iter(|| builder.build(black_box(name), VersionCorrection::LATEST))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_build,
    benchmark_build_batch,
    benchmark_chained_build,
);
criterion_main!(benches);
