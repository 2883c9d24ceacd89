//! Fan-out micro-benchmark: one log call against a populated registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use lumen_core::{Appender, Event, Level, Registry};

fn fan_out(c: &mut Criterion) {
    let registry = Registry::new();
    let hits = Arc::new(AtomicUsize::new(0));
    for i in 0..8 {
        let counter = hits.clone();
        let sink: Arc<dyn Appender> = Arc::new(move |_: Level, _: &str, _: &Event| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        let pattern = if i % 2 == 0 { ".*" } else { r"bench\..*" };
        registry.add(Level::INFO, pattern, sink).unwrap();
    }

    let event = Event::message("tick");
    c.bench_function("log_8_bindings", |b| {
        b.iter(|| registry.log(Level::WARN, "bench.Source", &event));
    });
    c.bench_function("log_below_threshold", |b| {
        b.iter(|| registry.log(Level::DEBUG, "bench.Source", &event));
    });
}

criterion_group!(benches, fan_out);
criterion_main!(benches);
