//! Criterion micro-benchmarks for cursor traversal.

use criterion::{criterion_group, criterion_main, Criterion};
use rove_bench::{box_blur, reference_frame, ring_means, row_walker, sample_cells, stress_frame};
use rove_core::{Bounds, PixelBuffer, Raster};
use rove_cursor::{neighbourhood_offsets, Cursor, Style, Walker};
use smallvec::SmallVec;
use std::hint::black_box;

/// Benchmark: Sum all 64K pixels of the reference frame with a linear cursor.
fn bench_linear_sum_64k(c: &mut Criterion) {
    let frame = reference_frame(42);

    c.bench_function("linear_sum_64k", |b| {
        b.iter(|| {
            let sum: u64 = Cursor::covering(&frame, Style::LINEAR)
                .pixels()
                .map(|&p| u64::from(p))
                .sum();
            black_box(sum);
        });
    });
}

/// Benchmark: Sum the ~1M pixel stress frame with a reverse linear cursor.
fn bench_linear_sum_1m(c: &mut Criterion) {
    let frame = stress_frame(42);

    c.bench_function("linear_reverse_sum_1m", |b| {
        b.iter(|| {
            let sum: u64 = Cursor::covering(&frame, Style::LINEAR_REVERSE)
                .pixels()
                .map(|&p| u64::from(p))
                .sum();
            black_box(sum);
        });
    });
}

/// Benchmark: Row-major nesting through an AXIS_ROW / SUB_AXIS_COL pair.
fn bench_nested_axis_64k(c: &mut Criterion) {
    let frame = reference_frame(42);
    let bounds = Bounds::covering(frame.width(), frame.height());

    c.bench_function("nested_axis_64k", |b| {
        b.iter(|| {
            let mut rows = Walker::root(frame.width(), bounds, Style::AXIS_ROW);
            let mut sum = 0u64;
            loop {
                for offset in Walker::sub(&rows, Style::SUB_AXIS_COL).into_offsets() {
                    sum += u64::from(*frame.pixel_at(offset));
                }
                if rows.is_terminal() {
                    break;
                }
                rows.step_forward();
            }
            black_box(sum);
        });
    });
}

/// Benchmark: Visit all four block shapes over the reference frame.
fn bench_block_samplers(c: &mut Criterion) {
    let frame = reference_frame(42);

    let mut group = c.benchmark_group("block_samplers");
    for style in [
        Style::BLOCK_16X16,
        Style::BLOCK_8X8,
        Style::BLOCK_16X8,
        Style::BLOCK_8X16,
    ] {
        group.bench_function(style.to_string(), |b| {
            b.iter(|| {
                let n = Cursor::covering(&frame, style).pixels().count();
                black_box(n);
            });
        });
    }
    group.finish();
}

/// Benchmark: Collect depth-1 and depth-2 neighbourhoods at 1000 cells.
fn bench_neighbourhoods_1k(c: &mut Criterion) {
    let (width, height) = (256, 256);
    let bounds = Bounds::covering(width, height);
    let cells = sample_cells(width, height, 1000, 7);

    for style in [Style::MOORE, Style::VON_NEUMANN, Style::MOORE2] {
        c.bench_function(&format!("neighbourhood_{style}_1k"), |b| {
            b.iter(|| {
                for &(row, col) in &cells {
                    let rows = row_walker(width, bounds, row);
                    let mut target = Walker::sub(&rows, Style::SUB_AXIS_COL);
                    for _ in 0..col {
                        target.step_forward();
                    }
                    let n: SmallVec<[usize; 24]> = neighbourhood_offsets(&target, style);
                    black_box(&n);
                }
            });
        });
    }
}

/// Benchmark: Full 3x3 box blur of the reference frame.
fn bench_box_blur_64k(c: &mut Criterion) {
    let src = reference_frame(42);
    let mut dst = Raster::new(src.width(), src.height(), 0u8);

    c.bench_function("box_blur_64k", |b| {
        b.iter(|| {
            box_blur(&src, &mut dst);
            black_box(dst.as_slice());
        });
    });
}

/// Benchmark: Per-ring means through an ORBITAL_IN / SUB_ORBIT pair.
fn bench_ring_means_64k(c: &mut Criterion) {
    let src = reference_frame(42);

    c.bench_function("ring_means_64k", |b| {
        b.iter(|| black_box(ring_means(&src)));
    });
}

criterion_group!(
    benches,
    bench_linear_sum_64k,
    bench_linear_sum_1m,
    bench_nested_axis_64k,
    bench_block_samplers,
    bench_neighbourhoods_1k,
    bench_box_blur_64k,
    bench_ring_means_64k
);
criterion_main!(benches);
