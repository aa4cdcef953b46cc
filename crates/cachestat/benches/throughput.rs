//! Benchmarks for the report hot path

use cachestat::{
    CacheEvent, CacheEventReporter, Counter, Label, Meter, MeterProvider, NoopProvider,
    ReporterOpts, Result, StatsCollector, StatsHandler,
};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::fmt;
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timeout")
    }
}

impl std::error::Error for Timeout {}

fn bench_noop_backend(c: &mut Criterion) {
    let reporter = CacheEventReporter::new("bench", &NoopProvider, ReporterOpts::new()).unwrap();

    let mut group = c.benchmark_group("noop_backend");
    group.throughput(Throughput::Elements(1));

    group.bench_function("report_hit", |b| {
        b.iter(|| black_box(&reporter).report_hit());
    });

    group.bench_function("report_query_failure", |b| {
        b.iter(|| black_box(&reporter).report_query_failure(black_box(&Timeout)));
    });

    group.finish();
}

/// Counter that only tallies, so the bench measures the reporter itself
#[derive(Debug, Default)]
struct CountingProvider {
    adds: Arc<AtomicU64>,
}

impl MeterProvider for CountingProvider {
    fn meter(&self, _name: &'static str) -> Arc<dyn Meter> {
        Arc::new(CountingCounter {
            adds: Arc::clone(&self.adds),
        })
    }
}

#[derive(Debug)]
struct CountingCounter {
    adds: Arc<AtomicU64>,
}

impl Meter for CountingCounter {
    fn create_counter(&self, _name: &str, _description: &str) -> Result<Arc<dyn Counter>> {
        Ok(Arc::new(CountingCounter {
            adds: Arc::clone(&self.adds),
        }))
    }
}

impl Counter for CountingCounter {
    fn add(&self, delta: u64, labels: &[Label<'_>]) -> Result<()> {
        black_box(labels);
        self.adds.fetch_add(delta, Ordering::Relaxed);
        Ok(())
    }
}

fn bench_counting_backend(c: &mut Criterion) {
    let provider = CountingProvider::default();
    let reporter = CacheEventReporter::new("bench", &provider, ReporterOpts::new()).unwrap();

    let mut group = c.benchmark_group("counting_backend");
    group.throughput(Throughput::Elements(1));

    group.bench_function("report_local_hit", |b| {
        b.iter(|| black_box(&reporter).report_local_hit());
    });

    group.bench_function("report_event", |b| {
        let event = CacheEvent::RemoteMiss;
        b.iter(|| black_box(&reporter).report(black_box(&event)));
    });

    group.finish();
}

fn bench_collector(c: &mut Criterion) {
    let collector = StatsCollector::new();

    c.bench_function("collector_report_miss", |b| {
        b.iter(|| black_box(&collector).report_miss());
    });
}

criterion_group!(
    benches,
    bench_noop_backend,
    bench_counting_backend,
    bench_collector
);
criterion_main!(benches);
