use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slotify::{by_start, find, find_with_mapper, Block, FindOptions, Instant, Period, Slot, Span};
use std::convert::Infallible;
use std::hint::black_box;

fn at(hours: i64) -> Instant {
    Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap() + Duration::hours(hours)
}

/// One-hour bookings every other hour, shuffled into descending order.
fn alternating_blocks(count: i64) -> Vec<Block> {
    (0..count)
        .rev()
        .map(|i| Block::new_unchecked(at(2 * i + 1), at(2 * i + 2)))
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for count in [10i64, 100, 1_000, 10_000] {
        let blocks = alternating_blocks(count);
        let span = Span::new(at(0), at(2 * count + 1)).unwrap();

        group.bench_with_input(BenchmarkId::new("alternating", count), &blocks, |b, blocks| {
            b.iter(|| find(black_box(blocks), black_box(Some(&span))));
        });
    }

    group.finish();
}

fn bench_find_with_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_with_mapper");

    let blocks = alternating_blocks(1_000);
    let span = Span::new(at(0), at(2_001)).unwrap();
    let options = FindOptions::with_filter(|s: &(i64, i64)| s.1 - s.0 >= 3_600);

    group.bench_function("tuple_output_filtered", |b| {
        b.iter(|| {
            let result: Result<Vec<(i64, i64)>, Infallible> = find_with_mapper(
                black_box(&blocks),
                Some(&span),
                by_start,
                |block| Ok(*block),
                |slot: Slot| Ok((slot.start().timestamp(), slot.end().timestamp())),
                &options,
            );
            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find, bench_find_with_filter);
criterion_main!(benches);
