// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The uniform cell grid.
//!
//! Boxes are bucketed into fixed-size cells keyed by `(i32, i32)`. A query
//! touches only the cells its rectangle spans and reports each slot at most
//! once. The structure is additive: a scatter layout builds one grid per
//! run, inserts every placed box exactly once, and drops the whole grid when
//! the run ends. There is no removal or update path.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::types::{Aabb, GridScalar};

/// Additive uniform grid over already-placed AABBs.
///
/// Answers "which placed slots could overlap this rectangle" by scanning the
/// cells the rectangle covers. Candidates are a superset of true overlaps:
/// the grid does no geometric filtering, so the caller applies its own exact
/// predicate. Missing a true overlap would be a correctness bug; reporting a
/// non-overlap is only wasted work.
pub struct CellGrid<T: GridScalar> {
    cell_size: T,
    cells: HashMap<(i32, i32), SmallVec<[usize; 8]>>,
    inserted: usize,
}

impl<T: GridScalar> Debug for CellGrid<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellGrid")
            .field("cell_size", &self.cell_size)
            .field("inserted", &self.inserted)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl<T: GridScalar> CellGrid<T> {
    /// Create an empty grid with the given cell size.
    ///
    /// See [`GridScalar::cell_size_for`] for the sizing rule layout runs use.
    pub fn new(cell_size: T) -> Self {
        debug_assert!(
            cell_size > T::zero(),
            "cell_size must be strictly positive"
        );
        Self {
            cell_size,
            cells: HashMap::new(),
            inserted: 0,
        }
    }

    /// The fixed cell size this grid was built with.
    pub fn cell_size(&self) -> T {
        self.cell_size
    }

    /// Number of boxes inserted so far.
    pub fn len(&self) -> usize {
        self.inserted
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell_range(&self, min: T, max: T) -> (i32, i32) {
        let c0 = T::cell_coord(min, self.cell_size);
        let c1 = T::cell_coord(max, self.cell_size);
        if c0 <= c1 { (c0, c1) } else { (c1, c0) }
    }

    /// Record `slot` in every cell `aabb` touches.
    ///
    /// Callers insert each slot exactly once; duplicate insertion is not
    /// checked and would make the slot show up repeatedly in candidates.
    pub fn insert(&mut self, slot: usize, aabb: &Aabb<T>) {
        let (ix0, ix1) = self.cell_range(aabb.min_x, aabb.max_x);
        let (iy0, iy1) = self.cell_range(aabb.min_y, aabb.max_y);
        for ix in ix0..=ix1 {
            for iy in iy0..=iy1 {
                self.cells.entry((ix, iy)).or_default().push(slot);
            }
        }
        self.inserted += 1;
    }

    /// Visit each distinct slot whose cells overlap `aabb`'s cell range.
    ///
    /// Slots spanning several covered cells are reported once. Visit order is
    /// unspecified; callers needing order should collect and sort.
    pub fn visit_candidates<F: FnMut(usize)>(&self, aabb: &Aabb<T>, mut f: F) {
        let (ix0, ix1) = self.cell_range(aabb.min_x, aabb.max_x);
        let (iy0, iy1) = self.cell_range(aabb.min_y, aabb.max_y);

        let mut seen: HashSet<usize> = HashSet::new();
        for ix in ix0..=ix1 {
            for iy in iy0..=iy1 {
                if let Some(bucket) = self.cells.get(&(ix, iy)) {
                    for &slot in bucket {
                        if seen.insert(slot) {
                            f(slot);
                        }
                    }
                }
            }
        }
    }

    /// Collecting convenience over [`visit_candidates`][Self::visit_candidates].
    pub fn candidates(&self, aabb: &Aabb<T>) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit_candidates(aabb, |slot| out.push(slot));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_grid_has_no_candidates() {
        let grid: CellGrid<f64> = CellGrid::new(32.0);
        assert!(grid.is_empty());
        assert_eq!(grid.cell_count(), 0);
        assert!(
            grid.candidates(&Aabb::from_xywh(-100.0, -100.0, 200.0, 200.0))
                .is_empty()
        );
    }

    #[test]
    fn insert_then_query_nearby() {
        let mut grid: CellGrid<f64> = CellGrid::new(32.0);
        grid.insert(0, &Aabb::from_xywh(-50.0, -75.0, 100.0, 150.0));
        grid.insert(1, &Aabb::from_xywh(300.0, 300.0, 80.0, 120.0));
        assert_eq!(grid.len(), 2);

        // A probe near the origin sees slot 0 but not the far-away slot 1.
        let near = grid.candidates(&Aabb::from_xywh(-10.0, -10.0, 20.0, 20.0));
        assert_eq!(near, vec![0]);

        let far = grid.candidates(&Aabb::from_xywh(310.0, 310.0, 10.0, 10.0));
        assert_eq!(far, vec![1]);
    }

    #[test]
    fn spanning_box_reported_once() {
        let mut grid: CellGrid<f64> = CellGrid::new(32.0);
        // Covers a 5x5 block of cells.
        grid.insert(7, &Aabb::from_xywh(0.0, 0.0, 150.0, 150.0));
        assert!(grid.cell_count() >= 25);

        let hits = grid.candidates(&Aabb::from_xywh(10.0, 10.0, 120.0, 120.0));
        assert_eq!(hits, vec![7]);
    }

    #[test]
    fn negative_coordinates_bucket_correctly() {
        let mut grid: CellGrid<f32> = CellGrid::new(32.0);
        grid.insert(3, &Aabb::from_xywh(-100.0, -100.0, 30.0, 30.0));

        let hits = grid.candidates(&Aabb::from_xywh(-90.0, -90.0, 10.0, 10.0));
        assert_eq!(hits, vec![3]);

        // Probes on the positive side of the origin miss it.
        let misses = grid.candidates(&Aabb::from_xywh(10.0, 10.0, 10.0, 10.0));
        assert!(misses.is_empty());
    }

    #[test]
    fn candidates_are_a_superset_of_true_overlaps() {
        let mut grid: CellGrid<f64> = CellGrid::new(32.0);
        // Two boxes in the same cell that do not touch each other.
        grid.insert(0, &Aabb::from_xywh(0.0, 0.0, 5.0, 5.0));
        grid.insert(1, &Aabb::from_xywh(20.0, 20.0, 5.0, 5.0));

        // A probe in that cell reports both; the caller's exact predicate
        // is what decides real overlap.
        let mut hits = grid.candidates(&Aabb::from_xywh(1.0, 1.0, 2.0, 2.0));
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);
    }
}
