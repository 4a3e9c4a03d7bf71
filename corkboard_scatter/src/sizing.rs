// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popularity-to-size mapping for poster items.
//!
//! Upstream data sources hand the layout a list of poster records with a
//! likes count; this module turns that count into render dimensions. The
//! contract the engine relies on: the mapping is monotonic non-decreasing
//! in likes, bounded between a minimum and maximum height, and keeps a
//! fixed aspect ratio.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;

use crate::item::ScatterItem;

/// Maps a likes count to a poster size.
///
/// Growth is square-root shaped between `min_height` (at zero likes) and
/// `max_height` (at `likes_cap` and beyond), so early likes change a
/// poster's size more than late ones. Width follows height through the
/// fixed `aspect` ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeScale {
    /// Height assigned at zero likes.
    pub min_height: f64,
    /// Height assigned at `likes_cap` likes and beyond.
    pub max_height: f64,
    /// Width over height. Posters are portrait by default.
    pub aspect: f64,
    /// Likes count at which the size stops growing.
    pub likes_cap: f64,
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            min_height: 120.0,
            max_height: 240.0,
            aspect: 0.75,
            likes_cap: 250.0,
        }
    }
}

impl SizeScale {
    /// Height for a likes count. Monotonic non-decreasing and bounded.
    pub fn height_for(&self, likes: f64) -> f64 {
        let cap = self.likes_cap.max(1.0);
        let t = (likes.max(0.0) / cap).min(1.0).sqrt();
        self.min_height + (self.max_height - self.min_height).max(0.0) * t
    }

    /// Render size for a likes count, at the fixed aspect ratio.
    pub fn size_for(&self, likes: f64) -> Size {
        let height = self.height_for(likes);
        Size::new(height * self.aspect, height)
    }

    /// Build a layout item for a poster record.
    pub fn item_for<I>(&self, id: I, likes: f64) -> ScatterItem<I> {
        let size = self.size_for(likes);
        ScatterItem::new(id, size.width, size.height)
    }
}
