//! # Quantum-Chain Subsystem Benchmarks
//!
//! | Subsystem | Claim | Target |
//! |-----------|-------|--------|
//! | qc-18 Content Operations | Single operation validation | < 50µs |
//! | qc-18 Content Operations | Batch validation scales with workers | linear |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_18_content_operations::{
    codec, ContentOperationsApi, ContentValidationService, FeeScheduleHistory, ServiceConfig,
};
use qc_tests::support::post;
use rand::Rng;
use std::time::Duration;

fn random_body(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn bench_single_operation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-content-operations");
    group.measurement_time(Duration::from_secs(5));

    let service = ContentValidationService::new();
    for body_len in [0usize, 1_024, 16_384] {
        let op = post(i64::MAX, &random_body(body_len));
        let bytes = codec::encode(&op).unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("process", body_len), &op, |b, op| {
            b.iter(|| black_box(service.process(op, 1).is_ok()))
        });
        group.bench_with_input(
            BenchmarkId::new("process_encoded", body_len),
            &bytes,
            |b, bytes| b.iter(|| black_box(service.process_encoded(bytes, 1).is_ok())),
        );
    }
    group.finish();
}

fn bench_batch_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-content-operations-batch");
    group.measurement_time(Duration::from_secs(10));

    for size in [10usize, 100, 1_000] {
        let ops: Vec<_> = (0..size)
            .map(|_| post(i64::MAX, &random_body(512)))
            .collect();

        for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
            let service = ContentValidationService::with_config(
                ServiceConfig {
                    parallel_batch_threshold: threshold,
                    ..ServiceConfig::default()
                },
                FeeScheduleHistory::default(),
            );
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(label, size), &ops, |b, ops| {
                b.iter(|| black_box(service.process_batch(ops, 1).len()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_single_operation, bench_batch_validation);
criterion_main!(benches);
