//! Criterion benchmarks for whole simulation runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use plummet_bench::{fine_step_profile, full_horizon_profile, reference_profile, Profile};
use plummet_core::NoProgress;
use plummet_engine::{CancelToken, Engine};

fn bench_profile(c: &mut Criterion, name: &str, profile: Profile) {
    let engine = Engine::new(profile.config).unwrap();
    let cancel = CancelToken::new();
    c.bench_function(name, |b| {
        b.iter(|| {
            let result = engine
                .run(black_box(&profile.params), &cancel, &mut NoProgress)
                .unwrap();
            black_box(&result);
        });
    });
}

fn bench_reference_run(c: &mut Criterion) {
    bench_profile(c, "run_reference", reference_profile());
}

fn bench_full_horizon_run(c: &mut Criterion) {
    bench_profile(c, "run_full_horizon", full_horizon_profile());
}

fn bench_fine_step_run(c: &mut Criterion) {
    bench_profile(c, "run_fine_step", fine_step_profile());
}

criterion_group!(
    benches,
    bench_reference_run,
    bench_full_horizon_run,
    bench_fine_step_run
);
criterion_main!(benches);
