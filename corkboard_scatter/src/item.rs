// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input items and layout output types.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

/// An input rectangle to be laid out: a poster with a stable identity.
///
/// Items are immutable inputs; the engine never mutates them. Widths and
/// heights are render sizes in logical pixels and should be positive.
/// Degenerate values are clamped to 1 during layout rather than rejected,
/// so one bad record cannot abort the layout of all others.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterItem<I> {
    /// Stable identifier, carried through to the placed output.
    pub id: I,
    /// Render width in logical pixels.
    pub width: f64,
    /// Render height in logical pixels.
    pub height: f64,
}

impl<I> ScatterItem<I> {
    /// Create an item from an id and render size.
    pub const fn new(id: I, width: f64, height: f64) -> Self {
        Self { id, width, height }
    }
}

/// One placed poster: the originating id plus its world-space rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPoster<I> {
    /// Identifier of the originating [`ScatterItem`].
    pub id: I,
    /// World-space rectangle. Coordinates are signed and centered on the
    /// layout origin; translate by the layout's origin offset for rendering.
    pub rect: Rect,
}

/// Diagnostic counters from a layout run.
///
/// Degradation is surfaced here rather than through errors: the engine is
/// total for valid inputs and the counters let hosts and tests observe the
/// rare escape hatches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementStats {
    /// Items placed through the exhaustion fallback instead of the ring
    /// search. Expected to be zero for any reasonable input.
    pub forced_placements: usize,
    /// Total outward ring expansions across all items.
    pub rings_expanded: usize,
}

/// The aggregate output of a layout run.
///
/// Recomputed wholesale whenever the item list or parameters change; never
/// patched incrementally.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterLayout<I> {
    /// Placed posters, in the same order as the input items.
    pub placed: Vec<PlacedPoster<I>>,
    /// Size of the padded bounding box of all placed rectangles.
    pub content_size: Size,
    /// Translation mapping the minimum world corner to `(padding, padding)`,
    /// so content renders in a non-negative coordinate system.
    pub origin_offset: Vec2,
    /// Diagnostic counters.
    pub stats: PlacementStats,
}

impl<I> ScatterLayout<I> {
    /// An empty layout: no posters, zero content size.
    pub fn empty() -> Self {
        Self {
            placed: Vec::new(),
            content_size: Size::ZERO,
            origin_offset: Vec2::ZERO,
            stats: PlacementStats::default(),
        }
    }

    /// Number of placed posters.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Returns `true` if the layout holds no posters.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Render-space rectangle of `placed[index]`: the world rectangle
    /// translated by the origin offset.
    pub fn render_rect(&self, index: usize) -> Rect {
        self.placed[index].rect + self.origin_offset
    }
}

impl<I> Default for ScatterLayout<I> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_is_zero_state() {
        let layout: ScatterLayout<u32> = ScatterLayout::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert_eq!(layout.content_size, Size::ZERO);
        assert_eq!(layout.origin_offset, Vec2::ZERO);
        assert_eq!(layout.stats, PlacementStats::default());
    }

    #[test]
    fn render_rect_applies_origin_offset() {
        let layout = ScatterLayout {
            placed: alloc::vec![PlacedPoster {
                id: "a",
                rect: Rect::new(-50.0, -75.0, 50.0, 75.0),
            }],
            content_size: Size::new(260.0, 310.0),
            origin_offset: Vec2::new(130.0, 155.0),
            stats: PlacementStats::default(),
        };
        assert_eq!(layout.render_rect(0), Rect::new(80.0, 80.0, 180.0, 230.0));
    }
}
