use criterion::{criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use thermo_codec::{Encoder, SymbolTableBuilder};

use crate::benchmarks::zipfian_text;

fn encoding_benchmark(c: &mut Criterion) {
    let text = zipfian_text();
    let tables = SymbolTableBuilder::from_text(&text).build();

    let mut group = c.benchmark_group("encoder");
    group.sample_size(20);
    group.bench_function("encoding", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new(tables.encoding());
            encoder.encode_all(text.chars()).unwrap();
            encoder.into_bitstream()
        })
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
}
