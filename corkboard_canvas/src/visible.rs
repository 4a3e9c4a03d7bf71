// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure visible-set selection.

use alloc::vec::Vec;

use corkboard_scatter::ScatterLayout;
use kurbo::Rect;

/// Indices of the posters whose render-space rectangle intersects the
/// overscan-inflated viewport.
///
/// The viewport lives in render space (post origin-offset, non-negative
/// coordinates), matching what a pan controller reports. `None` means the
/// viewport has not been measured yet; everything is selected so the first
/// frame can render before the controller's first report.
///
/// This is a plain linear filter over the placed set, cheap enough to run
/// on every (throttled) viewport change.
pub fn visible_set<I>(
    layout: &ScatterLayout<I>,
    viewport: Option<Rect>,
    overscan: f64,
) -> Vec<usize> {
    let Some(viewport) = viewport else {
        return (0..layout.len()).collect();
    };
    let overscan = overscan.max(0.0);
    let expanded = viewport.inflate(overscan, overscan);
    (0..layout.len())
        .filter(|&i| intersects(&layout.render_rect(i), &expanded))
        .collect()
}

/// Strict AABB intersection: rectangles sharing only an edge do not count.
fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}
