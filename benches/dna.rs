use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mdt_utils::{dna_hash, dna_hash_strict};
use std::hint::black_box;

fn bench_dna_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("dna_hash");

    for input in [
        "A",
        "license:0123456789abcdef0123456789abcdef01234567",
        "Ünïcödé with € and 😀",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), input, |b, s| {
            b.iter(|| dna_hash(black_box(s)));
        });
    }

    group.finish();
}

fn bench_dna_hash_strict(c: &mut Criterion) {
    let input = "license:0123456789abcdef0123456789abcdef01234567";
    c.bench_function("dna_hash_strict", |b| {
        b.iter(|| dna_hash_strict(black_box(input)));
    });
}

criterion_group!(benches, bench_dna_hash, bench_dna_hash_strict);
criterion_main!(benches);
