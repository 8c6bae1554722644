//! Cross-section parameters.

/// Tolerances for cross-section extraction and stitching.
///
/// Both tolerances are fixed distances, not scale-adaptive: surfaces at
/// wildly different absolute scales may mis-stitch. Scanned input in
/// millimeters sits comfortably inside these defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionParams {
    /// Distance under which two raw intersection points on one triangle
    /// are considered the same point (degenerate/vertex-touching cuts).
    pub triangle_merge_tolerance: f64,

    /// Distance under which a segment endpoint is considered coincident
    /// with a polyline endpoint during stitching.
    pub stitch_tolerance: f64,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            triangle_merge_tolerance: 1e-5,
            stitch_tolerance: 1e-6,
        }
    }
}

impl SectionParams {
    /// Create parameters with the default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the triangle point-merge tolerance.
    #[must_use]
    pub const fn with_triangle_merge_tolerance(mut self, tolerance: f64) -> Self {
        self.triangle_merge_tolerance = tolerance;
        self
    }

    /// Set the stitching coincidence tolerance.
    #[must_use]
    pub const fn with_stitch_tolerance(mut self, tolerance: f64) -> Self {
        self.stitch_tolerance = tolerance;
        self
    }
}
