// benches/decode.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use packed_codes::{CodeKind, CodecConfig, CodedVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Geometric-ish values: mostly small, a few large.
fn create_values(size: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| rng.random::<u64>() >> rng.random_range(40..64u32))
        .collect()
}

fn bench_random_get(c: &mut Criterion) {
    let values = create_values(100_000);
    let mut rng = StdRng::seed_from_u64(7);
    let indices: Vec<usize> = (0..1_000).map(|_| rng.random_range(0..values.len())).collect();
    let mut group = c.benchmark_group("random_get");
    for kind in CodeKind::ALL {
        let v = CodedVector::build(kind, &CodecConfig::default(), values.iter().copied())
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, _| {
            b.iter(|| {
                let mut acc = 0u64;
                for &i in &indices {
                    acc ^= black_box(v.get(i).unwrap());
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let values = create_values(100_000);
    let mut group = c.benchmark_group("scan");
    for kind in CodeKind::ALL {
        let v = CodedVector::build(kind, &CodecConfig::default(), values.iter().copied())
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, _| {
            b.iter(|| black_box(v.iter().fold(0u64, u64::wrapping_add)));
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let values = create_values(10_000);
    let mut group = c.benchmark_group("build");
    for kind in [CodeKind::EncEliasDelta, CodeKind::VlcFibonacci, CodeKind::Dac] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| CodedVector::build(kind, &CodecConfig::default(), values.iter().copied()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_get, bench_scan, bench_build);
criterion_main!(benches);
