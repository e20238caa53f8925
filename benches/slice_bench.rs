//! Slice helper benchmarks.
//!
//! Compares the quadratic `unique` against the hash-based `unique_hashed`,
//! and measures `chunk` and `sort_by_field` at several input sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use scalpel::SortFields;
use scalpel::slice::{SortOrder, chunk, sort_by_field, unique, unique_hashed};
use std::hint::black_box;

const SIZES: [u32; 3] = [100, 1000, 10000];

#[derive(Clone, SortFields)]
struct Row {
    id: u32,
    label: String,
}

/// Pre-generates input with roughly one duplicate per element.
fn generate_with_duplicates(size: u32) -> Vec<u32> {
    (0..size).map(|value| value / 2).collect()
}

fn generate_rows(size: u32) -> Vec<Row> {
    (0..size)
        .map(|value| {
            let id = value.wrapping_mul(2_654_435_761) % size;
            Row {
                id,
                label: format!("row-{id}"),
            }
        })
        .collect()
}

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    for size in SIZES {
        let input = generate_with_duplicates(size);
        group.bench_with_input(
            BenchmarkId::new("linear_scan", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(unique(black_box(input))));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("hashed", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(unique_hashed(black_box(input))));
            },
        );
    }

    group.finish();
}

fn benchmark_chunk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chunk");

    for size in SIZES {
        let input: Vec<u32> = (0..size).collect();
        group.bench_with_input(
            BenchmarkId::new("size_16", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(chunk(black_box(input), 16)));
            },
        );
    }

    group.finish();
}

fn benchmark_sort_by_field(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by_field");

    for size in SIZES {
        let rows = generate_rows(size);
        for field in ["id", "label"] {
            group.bench_with_input(BenchmarkId::new(field, size), &rows, |bencher, rows| {
                bencher.iter_batched(
                    || rows.clone(),
                    |mut rows| {
                        sort_by_field(&mut rows, field, SortOrder::Ascending).unwrap();
                        black_box(rows)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_unique,
    benchmark_chunk,
    benchmark_sort_by_field
);
criterion_main!(benches);
