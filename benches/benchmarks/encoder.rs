use criterion::{black_box, criterion_group, Criterion, Throughput};

use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::huffman::HuffmanCodec;

use crate::benchmarks::get_text;

fn encoding_benchmark(c: &mut Criterion) {
    let text = get_text();
    let binary = HuffmanCodec::<2>::from_text(&text);
    let hexadecimal = HuffmanCodec::<16>::from_text(&text);

    let mut group = c.benchmark_group("encoder benchmark");
    group.throughput(Throughput::Elements(text.len() as u64));
    group.sample_size(10);
    group.bench_function("encoding with order 2", |b| b.iter(|| binary.encode(black_box(&text))));
    group.bench_function("encoding with order 16", |b| {
        b.iter(|| hexadecimal.encode(black_box(&text)))
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
    }
