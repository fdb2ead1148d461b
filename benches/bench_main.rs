use criterion::criterion_main;

mod benchmarks;

criterion_main! {
    benchmarks::tables::tables_benches,
    benchmarks::encoder::encoder_benches,
    benchmarks::decoder::decoder_benches,
}
