// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for startup directory scanning.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::app::config::SortOrder;
use iced_gallery::asset_source;
use iced_gallery::gallery::Gallery;
use std::fs;
use std::hint::black_box;

/// Benchmark scanning a directory of mixed files and building the gallery.
fn bench_scan_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("asset_scan");

    let dir = tempfile::tempdir().unwrap();
    for n in 0..500 {
        let ext = ["png", "jpg", "webp", "txt", "gif"][n % 5];
        fs::write(dir.path().join(format!("image_{n:04}.{ext}")), b"").unwrap();
    }

    for (name, order) in [
        ("alphabetical", SortOrder::Alphabetical),
        ("modified_date", SortOrder::ModifiedDate),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let paths = asset_source::scan(black_box(dir.path()), order).unwrap();
                black_box(Gallery::load(paths))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan_directory);
criterion_main!(benches);
