use criterion::{Criterion, black_box, criterion_group, criterion_main};
use enumerable::{Enumerable, Query};

const NUM_INTS: usize = 100_000;

fn benchmark_pipeline(c: &mut Criterion) {
    c.bench_function("pipeline/enumerable", |b| {
        b.iter(|| {
            let total = Enumerable::range_from(0)
                .filter(|x, _| 0 == x % 3)
                .select(|x, _| x * 2)
                .take(NUM_INTS)
                .sum();
            black_box(total)
        });
    });
    c.bench_function("pipeline/iter", |b| {
        b.iter(|| {
            let total: i64 = (0_i64..)
                .filter(|x| 0 == x % 3)
                .map(|x| x * 2)
                .take(NUM_INTS)
                .sum();
            black_box(total)
        });
    });
}

fn benchmark_order_by(c: &mut Criterion) {
    c.bench_function("order_by/then_by", |b| {
        b.iter(|| {
            let out = Enumerable::range(0, NUM_INTS)
                .map(|range| {
                    range
                        .order_by(|x| x % 97)
                        .then_by_descending(|&x| x)
                        .take(10)
                        .to_vec()
                })
                .unwrap_or_default();
            black_box(out)
        });
    });
}

criterion_group!(pipeline, benchmark_pipeline, benchmark_order_by);
criterion_main!(pipeline);
