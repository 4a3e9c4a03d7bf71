// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a layout, viewport state, and the cached
//! visible set.

use alloc::vec::Vec;

use corkboard_scatter::{PlacedPoster, ScatterLayout};
use kurbo::{Rect, Size};

use crate::visible::visible_set;

/// Controller for a virtualized scatter canvas.
///
/// This type:
/// - owns a [`ScatterLayout`] and the most recently accepted viewport,
/// - caches the visible set and recomputes it lazily,
/// - drops viewport updates that pan less than a configurable threshold,
///   so a host can forward raw per-frame pan events without recomputing
///   the visible set on every frame.
///
/// It does *not* know about any widget or gesture system; hosts feed it
/// viewport rectangles in render space (animated, gesture-driven, or a
/// test literal, it makes no difference) and diff the returned indices
/// to mount and unmount poster views.
#[derive(Debug)]
pub struct VirtualCanvas<I> {
    layout: ScatterLayout<I>,
    viewport: Option<Rect>,
    overscan: f64,
    pan_threshold: f64,

    dirty: bool,
    visible: Vec<usize>,
}

impl<I> VirtualCanvas<I> {
    /// Creates a canvas over `layout` with the given symmetric `overscan`.
    ///
    /// No viewport is set yet, so the first call to
    /// [`visible_indices`][Self::visible_indices] reports every poster.
    #[must_use]
    pub fn new(layout: ScatterLayout<I>, overscan: f64) -> Self {
        Self {
            layout,
            viewport: None,
            overscan: overscan.max(0.0),
            pan_threshold: 0.0,
            dirty: true,
            visible: Vec::new(),
        }
    }

    /// Sets the pan distance below which viewport updates are dropped.
    ///
    /// With a threshold of zero (the default) every viewport change is
    /// accepted. Size changes are always accepted regardless of distance.
    #[must_use]
    pub fn with_pan_threshold(mut self, threshold: f64) -> Self {
        self.pan_threshold = threshold.max(0.0);
        self
    }

    /// Returns a shared reference to the layout.
    #[must_use]
    pub fn layout(&self) -> &ScatterLayout<I> {
        &self.layout
    }

    /// Replaces the layout, keeping viewport state.
    pub fn set_layout(&mut self, layout: ScatterLayout<I>) {
        self.layout = layout;
        self.dirty = true;
    }

    /// The content size a pan controller should size its canvas to.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.layout.content_size
    }

    /// The most recently accepted viewport, if any.
    #[must_use]
    pub const fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Returns the current overscan margin.
    #[must_use]
    pub const fn overscan(&self) -> f64 {
        self.overscan
    }

    /// Sets the overscan margin applied around the viewport.
    pub fn set_overscan(&mut self, overscan: f64) {
        let overscan = overscan.max(0.0);
        if overscan != self.overscan {
            self.overscan = overscan;
            self.dirty = true;
        }
    }

    /// Offers a new viewport rectangle in render space.
    ///
    /// Returns `true` if the update was accepted. A move smaller than the
    /// pan threshold (with an unchanged size) is dropped, leaving the
    /// cached visible set untouched; the overscan margin is what keeps the
    /// screen correct between accepted updates.
    pub fn set_viewport(&mut self, rect: Rect) -> bool {
        if let Some(prev) = self.viewport {
            let panned = (rect.origin() - prev.origin()).hypot();
            if panned < self.pan_threshold && rect.size() == prev.size() {
                return false;
            }
            if prev == rect {
                return false;
            }
        }
        self.viewport = Some(rect);
        self.dirty = true;
        true
    }

    /// Forgets the viewport, returning to render-everything behavior.
    pub fn clear_viewport(&mut self) {
        if self.viewport.is_some() {
            self.viewport = None;
            self.dirty = true;
        }
    }

    fn refresh(&mut self) {
        if self.dirty {
            self.visible = visible_set(&self.layout, self.viewport, self.overscan);
            self.dirty = false;
        }
    }

    /// Indices (into the layout's placed list) of the posters to render.
    pub fn visible_indices(&mut self) -> &[usize] {
        self.refresh();
        &self.visible
    }

    /// Visible posters paired with their render-space rectangles.
    pub fn visible_posters(&mut self) -> impl Iterator<Item = (&PlacedPoster<I>, Rect)> {
        self.refresh();
        let layout = &self.layout;
        self.visible
            .iter()
            .map(move |&i| (&layout.placed[i], layout.render_rect(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use corkboard_scatter::{ScatterItem, ScatterParams, compute_layout};

    fn small_layout() -> ScatterLayout<usize> {
        let items: Vec<ScatterItem<usize>> = (0..30)
            .map(|i| {
                let h = 90.0 + (i % 5) as f64 * 25.0;
                ScatterItem::new(i, h * 0.75, h)
            })
            .collect();
        compute_layout(&items, &ScatterParams::default())
    }

    #[test]
    fn everything_visible_before_first_viewport() {
        let mut canvas = VirtualCanvas::new(small_layout(), 100.0);
        assert_eq!(canvas.visible_indices().len(), 30);
    }

    #[test]
    fn viewport_narrows_the_visible_set() {
        let layout = small_layout();
        let content = layout.content_size;
        let mut canvas = VirtualCanvas::new(layout, 0.0);

        // A viewport covering the whole content sees everything.
        accepted(&mut canvas, Rect::new(0.0, 0.0, content.width, content.height));
        assert_eq!(canvas.visible_indices().len(), 30);

        // A small corner viewport sees strictly less.
        accepted(&mut canvas, Rect::new(0.0, 0.0, 60.0, 60.0));
        assert!(canvas.visible_indices().len() < 30);
    }

    fn accepted<I>(canvas: &mut VirtualCanvas<I>, rect: Rect) {
        assert!(canvas.set_viewport(rect), "viewport update was dropped");
    }

    #[test]
    fn sub_threshold_pans_are_dropped() {
        let mut canvas = VirtualCanvas::new(small_layout(), 100.0).with_pan_threshold(48.0);

        accepted(&mut canvas, Rect::new(0.0, 0.0, 400.0, 700.0));
        let before: Vec<usize> = canvas.visible_indices().to_vec();

        // A 10px pan is below the threshold: dropped, cache untouched.
        assert!(!canvas.set_viewport(Rect::new(10.0, 0.0, 410.0, 700.0)));
        assert_eq!(canvas.viewport(), Some(Rect::new(0.0, 0.0, 400.0, 700.0)));
        assert_eq!(canvas.visible_indices(), &before[..]);

        // A 60px pan crosses it.
        assert!(canvas.set_viewport(Rect::new(60.0, 0.0, 460.0, 700.0)));
        assert_eq!(canvas.viewport(), Some(Rect::new(60.0, 0.0, 460.0, 700.0)));
    }

    #[test]
    fn resize_is_accepted_regardless_of_distance() {
        let mut canvas = VirtualCanvas::new(small_layout(), 0.0).with_pan_threshold(48.0);
        accepted(&mut canvas, Rect::new(0.0, 0.0, 400.0, 700.0));
        // Same origin, different size: accepted.
        assert!(canvas.set_viewport(Rect::new(0.0, 0.0, 500.0, 700.0)));
    }

    #[test]
    fn clear_viewport_restores_render_everything() {
        let mut canvas = VirtualCanvas::new(small_layout(), 0.0);
        accepted(&mut canvas, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(canvas.visible_indices().len() < 30);

        canvas.clear_viewport();
        assert_eq!(canvas.visible_indices().len(), 30);
    }

    #[test]
    fn visible_posters_match_visible_indices() {
        let mut canvas = VirtualCanvas::new(small_layout(), 50.0);
        accepted(&mut canvas, Rect::new(0.0, 0.0, 300.0, 300.0));

        let indices: Vec<usize> = canvas.visible_indices().to_vec();
        let posters: Vec<usize> = canvas.visible_posters().map(|(p, _)| p.id).collect();
        assert_eq!(indices.len(), posters.len());

        // Every reported render rect intersects the expanded viewport.
        let expanded = Rect::new(0.0, 0.0, 300.0, 300.0).inflate(50.0, 50.0);
        for (_, rect) in canvas.visible_posters() {
            assert!(rect.x0 < expanded.x1 && rect.x1 > expanded.x0);
            assert!(rect.y0 < expanded.y1 && rect.y1 > expanded.y0);
        }
    }
}
