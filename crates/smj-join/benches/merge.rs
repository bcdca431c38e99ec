use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use smj_join::{JoinConfig, KeyedJoin, SortMergeJoin};

type Row = (u64, Option<u64>, Option<u64>);

fn sides(n: u64) -> (Vec<(u64, u64)>, Vec<(u64, u64)>) {
    // Keys span twice the input size, so many rows stay one-sided.
    let left = (0..n).map(|i| ((i * 7919) % (2 * n), i)).collect();
    let right = (0..n).map(|i| ((i * 104_729) % (2 * n), i)).collect();
    (left, right)
}

fn bench_merge(c: &mut Criterion) {
    let join = KeyedJoin::new(
        |l: &(u64, u64)| l.0,
        |r: &(u64, u64)| r.0,
        |m: Option<Row>, l: (u64, u64)| match m {
            Some((k, _, r)) => (k, Some(l.1), r),
            None => (l.0, Some(l.1), None),
        },
        |m: Option<Row>, r: (u64, u64)| match m {
            Some((k, l, _)) => (k, l, Some(r.1)),
            None => (r.0, None, Some(r.1)),
        },
    );

    let mut group = c.benchmark_group("merge_join");
    for n in [1_000u64, 10_000, 100_000] {
        let (left, right) = sides(n);
        group.bench_with_input(BenchmarkId::new("stable", n), &n, |b, _| {
            b.iter(|| {
                join.merge(black_box(left.clone()), black_box(right.clone()))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("unstable", n), &n, |b, _| {
            b.iter(|| {
                join.merge_with(
                    &JoinConfig::unstable(),
                    black_box(left.clone()),
                    black_box(right.clone()),
                )
                .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
