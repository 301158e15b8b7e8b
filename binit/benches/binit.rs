use binit::{bin_it, fixture, Bins, Limits};
use criterion::Throughput;

use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

fn bin_it_fixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("bin_it");
    group.throughput(Throughput::Elements(fixture::DATA.len() as u64));
    group.bench_function("fixture", |b| {
        b.iter(|| bin_it(fixture::LIMITS, fixture::DATA))
    });
    group.finish();
}

fn bins(c: &mut Criterion) {
    let limits = Limits::new((0..1024).map(|v| v * 64).collect()).unwrap();
    let mut bins = Bins::new(limits);

    let mut group = c.benchmark_group("bins");
    group.throughput(Throughput::Elements(1));
    group.bench_function("increment/min", |b| b.iter(|| bins.increment(i64::MIN)));

    bins.clear();
    group.bench_function("increment/max", |b| b.iter(|| bins.increment(i64::MAX)));

    group.finish();
}

criterion_group!(benches, bin_it_fixture, bins);
criterion_main!(benches);
