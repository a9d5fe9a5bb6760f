// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-page reading filter.
//!
//! Measures the colour pass over a page-sized RGBA buffer for:
//! - the light setting (no darkness, no coffee)
//! - full night mode
//! - night mode with the coffee tint on top

use criterion::{criterion_group, criterion_main, Criterion};
use nightread::document::pixel_filter::PixelFilter;
use nightread::domain::{combined_filter, Level};
use std::hint::black_box;

/// A4 page at 1.2x scale, roughly what the viewer renders.
const PAGE_WIDTH: usize = 714;
const PAGE_HEIGHT: usize = 1010;

/// Mostly white page with some dark "text" rows.
fn sample_page() -> Vec<u8> {
    let mut rgba = vec![255u8; PAGE_WIDTH * PAGE_HEIGHT * 4];
    for (row, line) in rgba.chunks_exact_mut(PAGE_WIDTH * 4).enumerate() {
        if row % 24 < 10 {
            for pixel in line.chunks_exact_mut(4).step_by(3) {
                pixel[..3].copy_from_slice(&[20, 20, 20]);
            }
        }
    }
    rgba
}

fn bench_page_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_filter");
    let page = sample_page();

    let cases = [
        ("light", Level::MIN, Level::MIN),
        ("night", Level::MAX, Level::MIN),
        ("night_coffee", Level::new(90), Level::new(60)),
    ];

    for (name, darkness, coffee) in cases {
        let filter = PixelFilter::new(&combined_filter(darkness, coffee));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rgba = page.clone();
                filter.apply_rgba(black_box(&mut rgba));
                black_box(rgba);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_filter);
criterion_main!(benches);
