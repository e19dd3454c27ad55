use criterion::{black_box, criterion_group, Criterion, Throughput};

use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::huffman::HuffmanCodec;

use crate::benchmarks::get_text;

fn decoding_benchmark(c: &mut Criterion) {
    let text = get_text();
    let binary = HuffmanCodec::<2>::from_text(&text);
    let hexadecimal = HuffmanCodec::<16>::from_text(&text);
    let binary_code = binary.encode(&text).unwrap();
    let hexadecimal_code = hexadecimal.encode(&text).unwrap();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(Throughput::Elements(text.len() as u64));
    group.sample_size(10);
    group.bench_function("decoding with order 2", |b| {
        b.iter(|| binary.try_decode(black_box(&binary_code)))
    });
    group.bench_function("decoding with order 16", |b| {
        b.iter(|| hexadecimal.try_decode(black_box(&hexadecimal_code)))
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decoding_benchmark
    }
