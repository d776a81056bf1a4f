//! Tick generation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rulemark_core::{
    generate, generate_all, GenerationConfig, GenerationMode, ScaleDefinition, Subsection,
    Transform,
};

fn c_scale() -> ScaleDefinition {
    ScaleDefinition::new("C", Transform::Log, 1.0, 10.0).with_subsections([
        Subsection::new(1.0, [1.0, 0.1, 0.05, 0.01]).with_label_levels([0, 1]),
        Subsection::new(2.0, [1.0, 0.5, 0.1, 0.02]),
        Subsection::new(4.0, [1.0, 0.5, 0.1, 0.05]),
    ])
}

fn ll_scale(decades: i32) -> ScaleDefinition {
    ScaleDefinition::new("LL", Transform::LogLog, 1.01, 10f64.powi(decades))
        .with_subsection(Subsection::new(1.01, [1.0, 0.1, 0.01, 0.001]))
}

fn bench_generate_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_c_scale");
    let scale = c_scale();

    for mode in [GenerationMode::Sweep, GenerationMode::Modulo] {
        let config = GenerationConfig::new().with_mode(mode);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            &config,
            |b, config| b.iter(|| generate(black_box(&scale), config)),
        );
    }
    group.finish();
}

fn bench_generate_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_dense");
    let config = GenerationConfig::default();

    for decades in [1, 2, 3] {
        let scale = ll_scale(decades);
        group.bench_with_input(BenchmarkId::from_parameter(decades), &scale, |b, scale| {
            b.iter(|| generate(black_box(scale), &config))
        });
    }
    group.finish();
}

fn bench_generate_all(c: &mut Criterion) {
    let scales: Vec<ScaleDefinition> = (0..32).map(|_| c_scale()).collect();
    let config = GenerationConfig::default();

    c.bench_function("generate_all_32", |b| {
        b.iter(|| generate_all(black_box(&scales), &config))
    });
}

criterion_group!(
    benches,
    bench_generate_modes,
    bench_generate_dense,
    bench_generate_all,
);
criterion_main!(benches);
