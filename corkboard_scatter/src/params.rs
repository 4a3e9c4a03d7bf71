// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout parameters and search tuning constants.

/// Empirically tuned constants of the placement search.
///
/// The defaults come from hand-tuning against real poster sets. None of
/// them is load-bearing for correctness (the no-overlap invariant holds
/// for any values); they only shape how the scatter looks and how fast
/// the search converges, which is why they are fields rather than
/// hardcoded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuning {
    /// Exponent applied to the size percentile. Higher values separate
    /// large items from small ones more sharply.
    pub gamma: f64,
    /// Estimated achievable packing density for randomly sized rectangles,
    /// used to derive the outer radius from total item area.
    pub packing_efficiency: f64,
    /// Size-score gate: items scoring below this may not start inside the
    /// core radius, keeping the visual center for sufficiently large items.
    pub core_gate: f64,
    /// Core radius as a fraction of the estimated outer radius.
    pub core_radius_frac: f64,
    /// Safety valve: outward ring expansions allowed per item before the
    /// forced-placement fallback.
    pub max_ring_expansions: usize,
    /// Fewest angle samples tried per ring.
    pub min_angle_samples: usize,
    /// Most angle samples tried per ring.
    pub max_angle_samples: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gamma: 2.0,
            packing_efficiency: 0.62,
            core_gate: 0.60,
            core_radius_frac: 0.35,
            max_ring_expansions: 1000,
            min_angle_samples: 12,
            max_angle_samples: 96,
        }
    }
}

/// Parameters of a layout run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScatterParams {
    /// Minimum gap between any two placed rectangles, in pixels.
    pub spacing: f64,
    /// How quickly the search radius grows when a ring is exhausted.
    /// Lower packs tighter at the cost of more collision checks.
    pub compactness: f64,
    /// Padding added on every side of the content bounding box.
    pub padding: f64,
    /// Search tuning constants.
    pub tuning: Tuning,
}

impl ScatterParams {
    /// Parameters with the given spacing, compactness, and padding, and
    /// default [`Tuning`].
    pub fn new(spacing: f64, compactness: f64, padding: f64) -> Self {
        Self {
            spacing,
            compactness,
            padding,
            tuning: Tuning::default(),
        }
    }
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self::new(12.0, 0.25, 80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tuning() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gamma, 2.0);
        assert_eq!(tuning.packing_efficiency, 0.62);
        assert_eq!(tuning.core_gate, 0.60);
        assert_eq!(tuning.core_radius_frac, 0.35);
        assert!(tuning.min_angle_samples <= tuning.max_angle_samples);

        let params = ScatterParams::default();
        assert_eq!(params.spacing, 12.0);
        assert_eq!(params.compactness, 0.25);
        assert_eq!(params.padding, 80.0);
    }
}
