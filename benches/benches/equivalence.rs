use std::sync::OnceLock;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use enumerable::Query;

const NUM_INTS: usize = 10_000;

fn vals() -> &'static [u32] {
    static VALS: OnceLock<Vec<u32>> = OnceLock::new();
    VALS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        let mut vals = Vec::with_capacity(NUM_INTS);
        for _ in 0..NUM_INTS {
            vals.push(rand::Rng::gen_range(&mut rng, 0..1000));
        }
        vals
    })
}

fn benchmark_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");
    for len in [100, 1_000, NUM_INTS] {
        let input = &vals()[..len];
        group.bench_with_input(BenchmarkId::new("hash", len), input, |b, input| {
            b.iter(|| {
                black_box(
                    enumerable::from_iter(input.iter().copied())
                        .distinct()
                        .count(),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", len), input, |b, input| {
            b.iter(|| {
                black_box(
                    enumerable::from_iter(input.iter().copied())
                        .distinct_with(|a, b| a == b)
                        .count(),
                )
            });
        });
    }
    group.finish();
}

fn benchmark_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    let outer = &vals()[..1_000];
    let inner = &vals()[1_000..2_000];
    group.bench_function("hash", |b| {
        b.iter(|| {
            black_box(
                enumerable::from_iter(outer.iter().copied())
                    .join(inner.iter().copied(), |&o| o, |&i| i, |&o, &i| o + i)
                    .count(),
            )
        });
    });
    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            black_box(
                enumerable::from_iter(outer.iter().copied())
                    .join_with(
                        inner.iter().copied(),
                        |&o| o,
                        |&i| i,
                        |&o, &i| o + i,
                        |a, b| a == b,
                    )
                    .count(),
            )
        });
    });
    group.finish();
}

criterion_group!(equivalence, benchmark_distinct, benchmark_join);
criterion_main!(equivalence);
