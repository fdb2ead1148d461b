use criterion::{criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use thermo_codec::{encode_text, Decoder, SymbolTableBuilder};

use crate::benchmarks::zipfian_text;

fn decoding_benchmark(c: &mut Criterion) {
    let text = zipfian_text();
    let tables = SymbolTableBuilder::from_text(&text).build();
    let stream = encode_text(&tables, &text).unwrap().bitstream;
    let decoder = Decoder::new(tables.decoding());

    let mut group = c.benchmark_group("decoder");
    // a full stream takes a while to decode: reduce the sample size.
    group.sample_size(10);
    group.bench_function("decoding", |b| b.iter(|| decoder.decode(&stream).unwrap()));
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decoding_benchmark
}
