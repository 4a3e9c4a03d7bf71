// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

use corkboard_canvas::visible_set;
use corkboard_scatter::{ScatterItem, ScatterParams, compute_layout};

/// Deterministic item sets so runs are comparable across machines.
fn gen_items(n: usize) -> Vec<ScatterItem<usize>> {
    (0..n)
        .map(|i| {
            let height = 90.0 + ((i * 37) % 13) as f64 * 12.0;
            ScatterItem::new(i, height * 0.75, height)
        })
        .collect()
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    for n in [100_usize, 500] {
        let items = gen_items(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| compute_layout(black_box(items), &ScatterParams::default()));
        });
    }
    group.finish();
}

fn bench_visible_set(c: &mut Criterion) {
    let items = gen_items(500);
    let layout = compute_layout(&items, &ScatterParams::default());

    // A phone-sized viewport in the middle of the content, with overscan.
    let content = layout.content_size;
    let cx = content.width * 0.5;
    let cy = content.height * 0.5;
    let viewport = Rect::new(cx - 195.0, cy - 390.0, cx + 195.0, cy + 390.0);

    c.bench_function("visible_set/500", |b| {
        b.iter(|| visible_set(black_box(&layout), Some(viewport), 200.0));
    });
}

criterion_group!(benches, bench_compute_layout, bench_visible_set);
criterion_main!(benches);
