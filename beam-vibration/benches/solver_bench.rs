//! Benchmarks for the beam vibration engine

use beam_vibration::analysis::characteristic;
use beam_vibration::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn steel_beam() -> BeamProperties {
    BeamProperties::new(2.0, 0.1, 0.3, 2.05e11, 7830.0).with_damping(0.02)
}

fn benchmark_roots(c: &mut Criterion) {
    let options = AnalysisOptions::default();
    c.bench_function("roots_all_beam_types", |b| {
        b.iter(|| {
            for beam_type in BeamType::ALL {
                black_box(characteristic::solve(beam_type, MAX_MODES, &options));
            }
        })
    });
}

fn benchmark_full_analysis(c: &mut Criterion) {
    let beam = steel_beam();
    c.bench_function("cantilever_full_analysis", |b| {
        b.iter(|| black_box(analyze(BeamType::Cantilever, black_box(&beam), MAX_MODES)))
    });
}

fn benchmark_long_beam(c: &mut Criterion) {
    // 50 m span gives 5001 mode shape samples per mode
    let mut beam = steel_beam();
    beam.length = 50.0;
    c.bench_function("fixed_fixed_50m_analysis", |b| {
        b.iter(|| black_box(analyze(BeamType::FixedFixed, black_box(&beam), MAX_MODES)))
    });
}

criterion_group!(
    benches,
    benchmark_roots,
    benchmark_full_analysis,
    benchmark_long_beam,
);

criterion_main!(benches);
