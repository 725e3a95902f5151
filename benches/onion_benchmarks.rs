//! Onion pipeline microbenchmarks.
//!
//! Run with: cargo criterion
//!
//! Both pipelines are pure and allocation-light; these benchmarks exist to
//! catch regressions in the projector's O(n) scan and the path builder's
//! O(resolution) string assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onionviz::config::EnvelopeConfig;
use onionviz::onion::convert::percentage_to_view;
use onionviz::onion::path::envelope_path;
use onionviz::onion::project::{project, Bitstring};
use onionviz::onion::Envelope;

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    for n in [64usize, 256, 1024] {
        let s: String = (0..n).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
        let bits: Bitstring = s.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("bitstring", n), &bits, |b, bits| {
            b.iter(|| black_box(project(bits, None)));
        });
    }
    group.finish();
}

fn bench_percentage_to_view(c: &mut Criterion) {
    let config = EnvelopeConfig::default();
    let bits: Bitstring = "1011001110".parse().unwrap();
    let point = project(&bits, None);
    c.bench_function("percentage_to_view", |b| {
        b.iter(|| black_box(percentage_to_view(&point, &config)));
    });
}

fn bench_envelope_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_path");
    for resolution in [100usize, 1000] {
        let config = EnvelopeConfig {
            half_width: 3.5,
            resolution,
        };
        let env = Envelope::new(&config).unwrap();
        group.bench_with_input(
            BenchmarkId::new("resolution", resolution),
            &env,
            |b, env| {
                b.iter(|| black_box(envelope_path(env)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_project,
    bench_percentage_to_view,
    bench_envelope_path
);
criterion_main!(benches);
