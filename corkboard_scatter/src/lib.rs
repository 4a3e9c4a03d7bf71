// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corkboard_scatter --heading-base-level=0

//! Corkboard Scatter: deterministic scatter placement for poster walls.
//!
//! Given a list of sized items (posters), [`compute_layout`] assigns every
//! item a non-overlapping position in an unbounded 2D plane so that the
//! result looks organically scattered rather than grid-aligned: total item
//! area clusters near the origin, larger items sit closer to the center,
//! and smaller items drift toward the rim.
//!
//! The search is fully deterministic: start angles are staggered by the
//! golden angle instead of jittered by a PRNG, so the same item list and
//! parameters always produce the same layout. That keeps snapshot tests
//! and cross-session canvas positions stable.
//!
//! Collision checks go through [`corkboard_index`]'s cell grid, built
//! fresh per layout run, so placing hundreds of items stays far from the
//! O(n²) of all-pairs scanning. Layouts are recomputed wholesale whenever
//! items or parameters change; this is a coarse, per-data-load operation,
//! not a per-frame one.
//!
//! # Example
//!
//! ```rust
//! use corkboard_scatter::{compute_layout, ScatterItem, ScatterParams, SizeScale};
//!
//! // Sizes derive from popularity: more likes, bigger poster.
//! let scale = SizeScale::default();
//! let items: Vec<ScatterItem<u32>> = (0..60)
//!     .map(|id| scale.item_for(id, f64::from((id * 37) % 250)))
//!     .collect();
//!
//! let layout = compute_layout(&items, &ScatterParams::default());
//! assert_eq!(layout.len(), items.len());
//! assert_eq!(layout.stats.forced_placements, 0);
//!
//! // World rectangles translate into a non-negative render space.
//! for i in 0..layout.len() {
//!     let rect = layout.render_rect(i);
//!     assert!(rect.x0 >= 0.0 && rect.y0 >= 0.0);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature
//! (default) or `libm` for float math.

#![no_std]

extern crate alloc;

mod engine;
mod item;
mod params;
mod sizing;

pub use engine::{compute_layout, rects_overlap_with_gap};
pub use item::{PlacedPoster, PlacementStats, ScatterItem, ScatterLayout};
pub use params::{ScatterParams, Tuning};
pub use sizing::SizeScale;
