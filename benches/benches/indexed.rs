use criterion::{Criterion, black_box, criterion_group, criterion_main};
use enumerable::Query;

const NUM_INTS: usize = 100_000;

fn vals() -> Vec<u64> {
    (0..NUM_INTS as u64).collect()
}

fn benchmark_count(c: &mut Criterion) {
    c.bench_function("indexed/count", |b| {
        b.iter_batched(
            || enumerable::from(vals()),
            |query| black_box(query.count()),
            criterion::BatchSize::LargeInput,
        );
    });
    c.bench_function("generic/count", |b| {
        b.iter_batched(
            || enumerable::from(vals()).into_generic(),
            |query| black_box(query.count()),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn benchmark_element_at(c: &mut Criterion) {
    c.bench_function("indexed/element_at", |b| {
        b.iter_batched(
            || enumerable::from(vals()),
            |query| black_box(query.element_at(NUM_INTS - 1)),
            criterion::BatchSize::LargeInput,
        );
    });
    c.bench_function("generic/element_at", |b| {
        b.iter_batched(
            || enumerable::from(vals()).into_generic(),
            |query| black_box(query.element_at(NUM_INTS - 1)),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn benchmark_last(c: &mut Criterion) {
    c.bench_function("indexed/last_where", |b| {
        b.iter_batched(
            || enumerable::from(vals()),
            |query| black_box(query.last_where(|&x| 0 == x % 7)),
            criterion::BatchSize::LargeInput,
        );
    });
    c.bench_function("generic/last_where", |b| {
        b.iter_batched(
            || enumerable::from(vals()).into_generic(),
            |query| black_box(query.last_where(|&x| 0 == x % 7)),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn benchmark_skip(c: &mut Criterion) {
    c.bench_function("indexed/skip", |b| {
        b.iter_batched(
            || enumerable::from(vals()),
            |query| black_box(query.skip(NUM_INTS - 10).sum()),
            criterion::BatchSize::LargeInput,
        );
    });
    c.bench_function("generic/skip", |b| {
        b.iter_batched(
            || enumerable::from(vals()).into_generic(),
            |query| black_box(query.skip(NUM_INTS - 10).sum()),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    indexed,
    benchmark_count,
    benchmark_element_at,
    benchmark_last,
    benchmark_skip,
);
criterion_main!(indexed);
