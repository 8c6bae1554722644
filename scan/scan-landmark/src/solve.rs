//! The one-call alignment solve.

use crate::{derive_landmarks, selection_plane, AlignResult, AlignmentPlan, FacePick, ProbeParams};
use nalgebra::Point3;
use scan_section::SectionParams;
use scan_spatial::ScanSurface;
use scan_types::Plane;
use tracing::info;

/// First-phase rotation angle, in radians.
///
/// Rotating the assembly by this angle about the lateral (X) axis
/// equalizes the two landmarks' depth coordinates. With axes
/// x=lateral, y=height, z=depth:
///
/// `atan2(depth2 - depth1, height1 - height2)`
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use scan_landmark::first_phase_angle;
///
/// let angle = first_phase_angle(
///     &Point3::new(0.0, 0.0, 0.0),
///     &Point3::new(0.0, 1.0, 1.0),
/// );
/// assert!((angle - 1.0_f64.atan2(-1.0)).abs() < 1e-15);
/// ```
#[must_use]
pub fn first_phase_angle(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p2.z - p1.z).atan2(p1.y - p2.y)
}

/// Second-phase rotation angle, in radians.
///
/// Rotating the assembly by this angle about the depth (Z) axis
/// equalizes the two landmarks' lateral coordinates:
///
/// `atan2(lateral1 - lateral2, height1 - height2)`
///
/// Callers pass the **original** landmark coordinates, not the points
/// as rotated by the first phase; [`AlignmentPlan`] freezes both
/// angles at construction accordingly.
#[must_use]
pub fn second_phase_angle(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p1.x - p2.x).atan2(p1.y - p2.y)
}

/// Parameters for the full alignment solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolveParams {
    /// Probe-ray parameters for selection-plane anchoring.
    pub probe: ProbeParams,
    /// Cross-section tolerances.
    pub section: SectionParams,
}

/// Everything the viewer needs to execute and display an alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSolution {
    /// Selection plane built from the first pick.
    pub plane_a: Plane,
    /// Selection plane built from the second pick.
    pub plane_b: Plane,
    /// The derived landmark pair, in world space.
    pub landmarks: (Point3<f64>, Point3<f64>),
    /// The two-phase rotation plan.
    pub plan: AlignmentPlan,
}

/// Solve an alignment from two picked faces.
///
/// Builds a selection plane per pick, derives the landmark pair (with
/// the mesh-swap fallback), and freezes the two-phase rotation plan.
///
/// # Errors
///
/// Propagates [`crate::AlignError`] from plane construction and
/// landmark derivation; on error the assembly is left unrotated.
pub fn solve_alignment(
    surface_a: &ScanSurface,
    pick_a: &FacePick,
    surface_b: &ScanSurface,
    pick_b: &FacePick,
    params: &SolveParams,
) -> AlignResult<AlignmentSolution> {
    let plane_a = selection_plane(surface_a, pick_a, &params.probe)?;
    let plane_b = selection_plane(surface_b, pick_b, &params.probe)?;

    let landmarks = derive_landmarks(surface_a, &plane_a, surface_b, &plane_b, &params.section)?;
    let plan = AlignmentPlan::new(landmarks.0, landmarks.1);

    info!(
        first_angle = plan.first_angle(),
        second_angle = plan.second_angle(),
        "alignment solved"
    );

    Ok(AlignmentSolution {
        plane_a,
        plane_b,
        landmarks,
        plan,
    })
}
