use criterion::{black_box, criterion_group, BenchmarkId, Criterion};

use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::huffman::{CodeTable, FrequencyTable, HuffmanTree};
use nary_huffman::{Freq, Symbol};

use crate::benchmarks::get_text;

fn build<const ORDER: usize>(symbols_freqs: &[(Symbol, Freq)]) -> CodeTable {
    let tree = HuffmanTree::<ORDER>::from_frequencies(symbols_freqs);
    let mut table = CodeTable::new();
    tree.generate_codes(&mut table);
    table
}

fn tree_building_benchmark(c: &mut Criterion) {
    let text = get_text();
    let frequencies = FrequencyTable::from_text(&text);

    let mut group = c.benchmark_group("tree building");

    group.bench_function("frequency counting", |b| {
        b.iter(|| FrequencyTable::from_text(black_box(&text)))
    });

    let symbols_freqs = frequencies.as_slice();
    group.bench_with_input(BenchmarkId::new("order", 2), symbols_freqs, |b, symbols_freqs| {
        b.iter(|| build::<2>(black_box(symbols_freqs)))
    });
    group.bench_with_input(BenchmarkId::new("order", 4), symbols_freqs, |b, symbols_freqs| {
        b.iter(|| build::<4>(black_box(symbols_freqs)))
    });
    group.bench_with_input(BenchmarkId::new("order", 16), symbols_freqs, |b, symbols_freqs| {
        b.iter(|| build::<16>(black_box(symbols_freqs)))
    });
    group.finish();
}

criterion_group! {
    name = tree_building_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = tree_building_benchmark
    }
