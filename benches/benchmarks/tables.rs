use criterion::{criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use thermo_codec::SymbolTableBuilder;

use crate::benchmarks::zipfian_text;

fn tables_benchmark(c: &mut Criterion) {
    let text = zipfian_text();

    c.bench_function("table building", |b| {
        b.iter(|| SymbolTableBuilder::from_text(&text).build())
    });
}

criterion_group! {
    name = tables_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = tables_benchmark
}
