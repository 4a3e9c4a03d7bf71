// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corkboard_index --heading-base-level=0

//! Corkboard Index: an additive uniform cell-grid index over 2D AABBs.
//!
//! This is the broad phase of the scatter layout engine. During a layout
//! run, every placed rectangle is inserted once; before each new rectangle
//! is placed, the grid answers "which already-placed rectangles could
//! overlap this candidate" by scanning only the cells the candidate spans,
//! instead of every placed rectangle.
//!
//! The crate is intentionally narrower than a general spatial index:
//!
//! - Insert and query only. Layouts are recomputed wholesale, never patched,
//!   so there is no removal, update, or damage tracking.
//! - One grid per layout run, owned by a single computation. Nothing is
//!   shared or reused across runs.
//! - Candidates are a superset of true overlaps. The caller applies its own
//!   exact overlap predicate; the grid guarantees only that it never misses
//!   a rectangle whose cells intersect the query's cells.
//!
//! It is generic over `f32`/`f64` via [`GridScalar`] and does not depend on
//! any geometry crate. Higher layers convert their rectangle types into
//! [`Aabb`] at the boundary.
//!
//! # Example
//!
//! ```rust
//! use corkboard_index::{Aabb, CellGrid, GridScalar};
//!
//! // Cell size follows the smallest item plus the spacing gap.
//! let cell = <f64 as GridScalar>::cell_size_for(60.0, 12.0);
//! let mut grid: CellGrid<f64> = CellGrid::new(cell);
//!
//! grid.insert(0, &Aabb::from_xywh(-50.0, -75.0, 100.0, 150.0));
//! grid.insert(1, &Aabb::from_xywh(400.0, 400.0, 80.0, 120.0));
//!
//! // Only the rectangle near the probe comes back as a candidate.
//! let near = grid.candidates(&Aabb::from_xywh(-10.0, -10.0, 60.0, 90.0));
//! assert_eq!(near, vec![0]);
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are assumed finite (no NaNs). Debug builds may assert.

#![no_std]

extern crate alloc;

mod grid;
mod types;

pub use grid::CellGrid;
pub use types::{Aabb, GridScalar};
