// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corkboard_canvas --heading-base-level=0

//! Corkboard Canvas: viewport virtualization over a scatter layout.
//!
//! A scatter layout can hold hundreds of posters, but a phone screen shows
//! a handful at a time. This crate selects the subset worth materializing:
//! the posters whose rectangles intersect the current viewport, expanded
//! by an overscan margin so content just outside the screen is ready
//! before a pan reveals it.
//!
//! Two layers are provided:
//!
//! - [`visible_set`]: a pure function of (layout, viewport, overscan).
//!   With no viewport yet (before the pan controller's first report) it
//!   selects everything.
//! - [`VirtualCanvas`]: a small controller that owns the layout and
//!   viewport state, caches the visible set, and drops viewport updates
//!   that pan less than a configurable threshold so hosts can forward raw
//!   per-frame events without recomputing every frame.
//!
//! Selection is a linear filter over the already-computed placement; the
//! expensive work happened once in [`corkboard_scatter`] at layout time.
//!
//! # Example
//!
//! ```rust
//! use corkboard_canvas::VirtualCanvas;
//! use corkboard_scatter::{compute_layout, ScatterItem, ScatterParams};
//! use kurbo::Rect;
//!
//! let items: Vec<ScatterItem<u32>> = (0..120)
//!     .map(|id| ScatterItem::new(id, 90.0, 120.0))
//!     .collect();
//! let layout = compute_layout(&items, &ScatterParams::default());
//!
//! let mut canvas = VirtualCanvas::new(layout, 200.0).with_pan_threshold(48.0);
//!
//! // Before the first viewport report, render everything.
//! assert_eq!(canvas.visible_indices().len(), 120);
//!
//! // Once the pan controller reports, only near-screen posters remain.
//! canvas.set_viewport(Rect::new(0.0, 0.0, 390.0, 780.0));
//! assert!(canvas.visible_indices().len() < 120);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature
//! (default) or `libm` for float math.

#![no_std]

extern crate alloc;

mod canvas;
mod visible;

pub use canvas::VirtualCanvas;
pub use visible::visible_set;
