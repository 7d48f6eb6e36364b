use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use fuzzy_aqi::standard::{self, RULES};

pub fn criterion_benchmark(c: &mut Criterion) {
    let engine = standard::engine().unwrap();
    let clean = [0.0; 6];
    let mixed = [80.0, 250.0, 15000.0, 120.0, 190.0, 700.0];
    let worst = [445.0, 550.0, 54165.0, 550.0, 1501.0, 3000.0];
    c.bench_function("compute clean", |b| b.iter(|| engine.compute(black_box(&clean))));
    c.bench_function("compute mixed", |b| b.iter(|| engine.compute(black_box(&mixed))));
    c.bench_function("compute worst", |b| b.iter(|| engine.compute(black_box(&worst))));
    c.bench_function("evaluate mixed", |b| b.iter(|| engine.evaluate(black_box(&mixed))));
    c.bench_function("build engine", |b| b.iter(|| standard::build_engine(black_box(RULES))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
