// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement engine: deterministic outward-spiral scatter.
//!
//! Items are placed one at a time, largest area first. Each item starts at
//! a radius biased by its size score (large items near the origin, small
//! ones near the estimated outer rim) and at a golden-angle staggered
//! start angle, then searches outward ring by ring for the first position
//! whose spacing-expanded rectangle collides with nothing already placed.
//! The already-placed set is queried through a per-run [`CellGrid`], so a
//! candidate check touches a handful of placed rectangles instead of all
//! of them.
//!
//! There is no randomness anywhere: the same items and parameters always
//! produce the same layout, bit for bit.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::f64::consts::{PI, TAU};

use corkboard_index::{Aabb, CellGrid, GridScalar};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::item::{PlacedPoster, PlacementStats, ScatterItem, ScatterLayout};
use crate::params::{ScatterParams, Tuning};

/// Golden angle `2π(1 − 1/φ) = π(3 − √5)`, in radians.
///
/// Staggering successive start angles by this stride spreads items evenly
/// around the circle without clustering artifacts, the same way phyllotactic
/// spirals do.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Hard cap on the outward march of the forced-placement fallback.
///
/// The march terminates as soon as it clears the furthest placed rectangle,
/// which for finite inputs happens long before this bound.
const FORCED_SCAN_LIMIT: usize = 4096;

/// Compute non-overlapping positions for every item.
///
/// Pure, deterministic, and total: any finite item list produces a layout,
/// and an empty list produces [`ScatterLayout::empty`]. Degenerate item
/// sizes (zero or negative) are clamped to 1 pixel. Two placed rectangles
/// never violate the spacing gap except through the counted
/// forced-placement fallback, and even that path is collision-checked (see
/// [`PlacementStats::forced_placements`]).
pub fn compute_layout<I: Clone>(
    items: &[ScatterItem<I>],
    params: &ScatterParams,
) -> ScatterLayout<I> {
    if items.is_empty() {
        return ScatterLayout::empty();
    }

    let n = items.len();
    let spacing = params.spacing.max(0.0);
    let padding = params.padding.max(0.0);
    let tuning = &params.tuning;

    // Degenerate sizes are clamped, not rejected: one bad record must not
    // abort the layout of all others.
    let sizes: Vec<Size> = items
        .iter()
        .map(|item| {
            debug_assert!(
                item.width.is_finite() && item.height.is_finite(),
                "item sizes must be finite"
            );
            Size::new(item.width.max(1.0), item.height.max(1.0))
        })
        .collect();

    // Largest area first; ties broken by input position so the order (and
    // with it the whole layout) is deterministic.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        sizes[b]
            .area()
            .partial_cmp(&sizes[a].area())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    // Size score: percentile of the area rank, sharpened by gamma.
    let mut score = vec![0.0_f64; n];
    for (rank, &item_idx) in order.iter().enumerate() {
        let p = if n == 1 {
            1.0
        } else {
            1.0 - rank as f64 / (n - 1) as f64
        };
        score[item_idx] = p.powf(tuning.gamma);
    }

    // Outer radius from total padded area at the expected packing density.
    let total_padded_area: f64 = sizes
        .iter()
        .map(|s| (s.width + spacing) * (s.height + spacing))
        .sum();
    let r_est = (total_padded_area / (PI * tuning.packing_efficiency.max(0.01))).sqrt();

    let min_extent = sizes
        .iter()
        .map(|s| s.width.min(s.height))
        .fold(f64::INFINITY, f64::min);
    let mut grid: CellGrid<f64> =
        CellGrid::new(<f64 as GridScalar>::cell_size_for(min_extent, spacing));

    // Rectangles in placement order (grid slots index into this), and the
    // final per-input-index result.
    let mut placed_seq: Vec<Rect> = Vec::with_capacity(n);
    let mut rect_of: Vec<Rect> = vec![Rect::ZERO; n];
    let mut stats = PlacementStats::default();

    for (rank, &item_idx) in order.iter().enumerate() {
        let size = sizes[item_idx];
        let s = score[item_idx];

        let theta0 = (rank as f64 * GOLDEN_ANGLE) % TAU;
        let mut radius = (1.0 - s) * r_est;
        if s < tuning.core_gate {
            // Only sufficiently large items may occupy the visual center.
            radius = radius.max(tuning.core_radius_frac * r_est);
        }

        let footprint = (size.width + size.height) * 0.5 + spacing;
        // Smaller items sweep outward faster; compactness scales the growth.
        let ring_step = (footprint * params.compactness * (2.0 - s)).max(1.0);

        let mut chosen = None;
        let mut rings = 0;
        loop {
            if let Some(rect) =
                try_ring(&grid, &placed_seq, size, radius, theta0, footprint, spacing, tuning)
            {
                chosen = Some(rect);
                break;
            }
            if rings == tuning.max_ring_expansions {
                break;
            }
            rings += 1;
            stats.rings_expanded += 1;
            radius += ring_step;
        }

        let rect = chosen.unwrap_or_else(|| {
            stats.forced_placements += 1;
            forced_placement(&grid, &placed_seq, size, radius, footprint, spacing)
        });

        // Index before moving on: later items' collision checks depend on
        // every earlier placement.
        grid.insert(placed_seq.len(), &grid_box(&rect, spacing));
        placed_seq.push(rect);
        rect_of[item_idx] = rect;
    }

    // Padded bounding box and the translation into render space.
    let mut bounds = rect_of[0];
    for rect in &rect_of[1..] {
        bounds = bounds.union(*rect);
    }
    let content_size = Size::new(
        bounds.width() + 2.0 * padding,
        bounds.height() + 2.0 * padding,
    );
    let origin_offset = Vec2::new(padding - bounds.x0, padding - bounds.y0);

    let placed = items
        .iter()
        .zip(rect_of)
        .map(|(item, rect)| PlacedPoster {
            id: item.id.clone(),
            rect,
        })
        .collect();

    ScatterLayout {
        placed,
        content_size,
        origin_offset,
        stats,
    }
}

/// Exact spacing-expanded overlap test between two rectangles.
///
/// Both rectangles are inflated by `spacing` on every side; strict
/// inequalities make a shared edge count as clear, so two posters may sit
/// exactly one gap apart.
pub fn rects_overlap_with_gap(a: &Rect, b: &Rect, spacing: f64) -> bool {
    (a.x0 - spacing) < (b.x1 + spacing)
        && (a.x1 + spacing) > (b.x0 - spacing)
        && (a.y0 - spacing) < (b.y1 + spacing)
        && (a.y1 + spacing) > (b.y0 - spacing)
}

/// The spacing-inflated box a rectangle occupies in the cell grid.
fn grid_box(rect: &Rect, spacing: f64) -> Aabb<f64> {
    Aabb::new(
        rect.x0 - spacing,
        rect.y0 - spacing,
        rect.x1 + spacing,
        rect.y1 + spacing,
    )
}

fn is_free(grid: &CellGrid<f64>, placed: &[Rect], rect: &Rect, spacing: f64) -> bool {
    let mut free = true;
    grid.visit_candidates(&grid_box(rect, spacing), |slot| {
        if free && rects_overlap_with_gap(rect, &placed[slot], spacing) {
            free = false;
        }
    });
    free
}

/// Try every sampled angle at one radius; first clear candidate wins.
#[allow(
    clippy::cast_possible_truncation,
    reason = "The sample-count estimate is non-negative and clamped right after the cast."
)]
fn try_ring(
    grid: &CellGrid<f64>,
    placed: &[Rect],
    size: Size,
    radius: f64,
    theta0: f64,
    footprint: f64,
    spacing: f64,
    tuning: &Tuning,
) -> Option<Rect> {
    // At the origin every angle is the same point; sample it once.
    let samples = if radius <= 0.0 {
        1
    } else {
        let ideal = (TAU * radius / footprint).ceil();
        (ideal as usize).clamp(tuning.min_angle_samples, tuning.max_angle_samples)
    };

    let step = TAU / samples as f64;
    for k in 0..samples {
        let angle = theta0 + k as f64 * step;
        let center = Point::new(radius * angle.cos(), radius * angle.sin());
        let rect = Rect::from_center_size(center, size);
        if is_free(grid, placed, &rect, spacing) {
            return Some(rect);
        }
    }
    None
}

/// Escape hatch for an exhausted ring search: march outward along angle 0
/// until a clear slot appears.
///
/// Still collision-checked, so even a forced placement cannot overlap;
/// past the furthest placed rectangle a clear slot always exists, which
/// bounds the march for finite inputs.
fn forced_placement(
    grid: &CellGrid<f64>,
    placed: &[Rect],
    size: Size,
    start_radius: f64,
    footprint: f64,
    spacing: f64,
) -> Rect {
    let step = footprint.max(1.0);
    let mut radius = start_radius;
    for _ in 0..FORCED_SCAN_LIMIT {
        let rect = Rect::from_center_size(Point::new(radius, 0.0), size);
        if is_free(grid, placed, &rect, spacing) {
            return rect;
        }
        radius += step;
    }
    // Unreached for finite inputs; the march clears the furthest placed
    // rectangle well inside the cap.
    Rect::from_center_size(Point::new(radius, 0.0), size)
}
