// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AABB primitive and the scalar abstraction used by the cell grid.

use core::fmt::Debug;

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb<T> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: GridScalar> Aabb<T> {
    /// Create an AABB from an origin and a size.
    #[inline]
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: T::add(x, w),
            max_y: T::add(y, h),
        }
    }

    /// Grow the AABB by `amount` on every side.
    ///
    /// A negative amount shrinks the box and may invert it; see
    /// [`is_empty`][Self::is_empty].
    #[inline]
    #[must_use]
    pub fn inflate(&self, amount: T) -> Self {
        Self {
            min_x: T::sub(self.min_x, amount),
            min_y: T::sub(self.min_y, amount),
            max_x: T::add(self.max_x, amount),
            max_y: T::add(self.max_y, amount),
        }
    }

    /// The smallest AABB enclosing `self` and `other`.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: T::min(self.min_x, other.min_x),
            min_y: T::min(self.min_y, other.min_y),
            max_x: T::max(self.max_x, other.max_x),
            max_y: T::max(self.max_y, other.max_y),
        }
    }

    /// Width of the AABB. Negative for inverted boxes.
    #[inline]
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Height of the AABB. Negative for inverted boxes.
    #[inline]
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// Returns `true` if the AABB has no area (empty or inverted). Assumes no NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

/// Scalar types the cell grid can bucket.
///
/// Implemented for `f32` and `f64` only: scatter layouts live in pixel
/// coordinates, and the grid has no use for wider numeric generality.
/// Coordinates are assumed finite (no NaNs); debug builds may assert.
pub trait GridScalar: Copy + PartialOrd + Debug {
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Min of the two scalar values.
    fn min(a: Self, b: Self) -> Self;

    /// Max of the two scalar values.
    fn max(a: Self, b: Self) -> Self;

    /// Map a world coordinate to a grid cell coordinate along one axis.
    ///
    /// Floor division: rounds toward −∞ so that negative world coordinates
    /// land in negative cells. Out-of-range results saturate to `i32`.
    fn cell_coord(value: Self, cell_size: Self) -> i32;

    /// Cell size for a layout run: `max(32, floor(min_extent + spacing))`.
    ///
    /// Cells sized near the smallest item keep both the number of cells an
    /// inserted box touches and the number a query scans small.
    fn cell_size_for(min_extent: Self, spacing: Self) -> Self;
}

impl GridScalar for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        Self::min(a, b)
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        Self::max(a, b)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
    )]
    #[inline]
    fn cell_coord(value: Self, cell_size: Self) -> i32 {
        debug_assert!(
            cell_size > 0.0,
            "grid cell_size must be strictly positive (f32)"
        );
        let t = value / cell_size;
        if t >= i32::MAX as Self {
            return i32::MAX;
        }
        if t <= i32::MIN as Self {
            return i32::MIN;
        }
        let coord = t as i32;

        // The cast truncates toward zero; shift negative fractions down.
        if t < 0.0 && (coord as Self) > t {
            coord.saturating_sub(1)
        } else {
            coord
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Extents are positive pixel quantities well inside i64 range; the cast floors."
    )]
    #[inline]
    fn cell_size_for(min_extent: Self, spacing: Self) -> Self {
        debug_assert!(
            min_extent > 0.0 && spacing >= 0.0,
            "cell_size_for needs a positive extent and non-negative spacing (f32)"
        );
        let padded = min_extent + spacing;
        // Truncation equals floor for positive values.
        Self::max(32.0, padded as i64 as Self)
    }
}

impl GridScalar for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        Self::min(a, b)
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        Self::max(a, b)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
    )]
    #[inline]
    fn cell_coord(value: Self, cell_size: Self) -> i32 {
        debug_assert!(
            cell_size > 0.0,
            "grid cell_size must be strictly positive (f64)"
        );
        let t = value / cell_size;
        if t >= Self::from(i32::MAX) {
            return i32::MAX;
        }
        if t <= Self::from(i32::MIN) {
            return i32::MIN;
        }
        let coord = t as i32;

        // The cast truncates toward zero; shift negative fractions down.
        if t < 0.0 && Self::from(coord) > t {
            coord.saturating_sub(1)
        } else {
            coord
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Extents are positive pixel quantities well inside i64 range; the cast floors."
    )]
    #[inline]
    fn cell_size_for(min_extent: Self, spacing: Self) -> Self {
        debug_assert!(
            min_extent > 0.0 && spacing >= 0.0,
            "cell_size_for needs a positive extent and non-negative spacing (f64)"
        );
        let padded = min_extent + spacing;
        // Truncation equals floor for positive values.
        Self::max(32.0, padded as i64 as Self)
    }
}
