//! Criterion micro-benchmarks for the extraction hot paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use strata_bench::{fault_forest_profile, survey_profile};
use strata_extract::{
    extract_horizon_attribute, interpolate_between_horizons, lateral_depth_map,
    propagate_fault_attribute, sample_records, FaultPropagation, HorizonExtraction,
    HorizonInterpolation,
};
use strata_store::PropertyPointRecord;

/// Benchmark: sample 40K records without any store overhead.
fn bench_sample_records_40k(c: &mut Criterion) {
    let profile = survey_profile(42);
    let volume = profile.project.volume(profile.volume).unwrap().clone();
    let points = profile
        .project
        .horizon(profile.upper)
        .unwrap()
        .projections()
        .next()
        .unwrap()
        .points()
        .to_vec();
    let mut records: Vec<PropertyPointRecord> =
        points.into_iter().map(PropertyPointRecord::undefined).collect();

    c.bench_function("sample_records_40k", |b| {
        b.iter(|| {
            let stats = sample_records(volume.as_ref(), &mut records);
            black_box(stats);
        });
    });
}

/// Benchmark: full horizon extraction including property creation and commit.
fn bench_extract_horizon(c: &mut Criterion) {
    c.bench_function("extract_horizon_40k", |b| {
        b.iter_batched(
            || survey_profile(7),
            |mut profile| {
                let request = HorizonExtraction {
                    volume: profile.volume,
                    horizon: profile.upper,
                    output: None,
                };
                black_box(extract_horizon_attribute(&mut profile.project, &request).unwrap());
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: build the companion lookup table for 40K points.
fn bench_lateral_depth_map(c: &mut Criterion) {
    let profile = survey_profile(42);
    let volume = profile.project.volume(profile.volume).unwrap().clone();
    let points = profile
        .project
        .horizon(profile.lower)
        .unwrap()
        .projections()
        .next()
        .unwrap()
        .points()
        .to_vec();

    c.bench_function("lateral_depth_map_40k", |b| {
        b.iter(|| black_box(lateral_depth_map(volume.as_ref(), &points)));
    });
}

/// Benchmark: two-offset interpolation between the profile horizons.
fn bench_interpolate(c: &mut Criterion) {
    c.bench_function("interpolate_thirds_40k", |b| {
        b.iter_batched(
            || survey_profile(7),
            |mut profile| {
                let request =
                    HorizonInterpolation::new(profile.volume, profile.lower, profile.upper);
                black_box(interpolate_between_horizons(&mut profile.project, &request).unwrap());
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: propagate across a 4-level, fan-out 3 forest (40 nodes, 120 faults).
fn bench_propagate_forest(c: &mut Criterion) {
    c.bench_function("propagate_forest_120_faults", |b| {
        b.iter_batched(
            || fault_forest_profile(42, 4, 3, 3),
            |(mut project, volume)| {
                let request = FaultPropagation::new(volume);
                black_box(propagate_fault_attribute(&mut project, &request).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_sample_records_40k,
    bench_extract_horizon,
    bench_lateral_depth_map,
    bench_interpolate,
    bench_propagate_forest
);
criterion_main!(benches);
