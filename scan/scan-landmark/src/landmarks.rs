//! Landmark derivation from two selection planes.

use crate::{AlignError, AlignResult};
use nalgebra::Point3;
use scan_section::{extract_contour, plane_crossings, SectionParams};
use scan_spatial::ScanSurface;
use scan_types::Plane;
use tracing::{debug, warn};

// Cross-product magnitude under which two plane normals are treated as
// parallel
const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Derive the pair of landmark points from two selection planes.
///
/// Cuts surface A with its own plane and crosses the primary contour
/// polyline with plane B. If that yields fewer than two points, the
/// symmetric attempt runs: surface B's contour under plane B, crossed
/// with plane A. Exactly one of the two attempts is expected to
/// succeed for a valid two-plane selection.
///
/// The first two crossing points in contour traversal order become the
/// landmarks.
///
/// # Errors
///
/// [`AlignError::ParallelPlanes`] when the planes have no intersection
/// line; [`AlignError::NoLandmarks`] when both attempts fail, in which
/// case the assembly is left unrotated.
pub fn derive_landmarks(
    surface_a: &ScanSurface,
    plane_a: &Plane,
    surface_b: &ScanSurface,
    plane_b: &Plane,
    params: &SectionParams,
) -> AlignResult<(Point3<f64>, Point3<f64>)> {
    if plane_a.is_parallel_to(plane_b, PARALLEL_TOLERANCE) {
        return Err(AlignError::ParallelPlanes);
    }

    if let Some(pair) = landmark_pair(surface_a, plane_a, plane_b, params) {
        debug!("landmarks derived from the first surface's contour");
        return Ok(pair);
    }

    warn!("first surface produced no landmarks, retrying with surfaces swapped");
    if let Some(pair) = landmark_pair(surface_b, plane_b, plane_a, params) {
        return Ok(pair);
    }

    warn!("both landmark attempts failed, leaving the assembly unrotated");
    Err(AlignError::NoLandmarks)
}

/// One directional attempt: cut with `cut_plane`, cross the primary
/// polyline with `cross_plane`.
fn landmark_pair(
    surface: &ScanSurface,
    cut_plane: &Plane,
    cross_plane: &Plane,
    params: &SectionParams,
) -> Option<(Point3<f64>, Point3<f64>)> {
    let contour = extract_contour(surface, cut_plane, params);
    let primary = contour.primary()?;
    let crossings = plane_crossings(primary, cross_plane);
    if crossings.len() < 2 {
        return None;
    }
    Some((crossings[0], crossings[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scan_types::{cube, Point3, RigidPose, Vector3};

    fn cube_surface() -> ScanSurface {
        ScanSurface::new(cube(2.0), RigidPose::identity())
    }

    #[test]
    fn parallel_planes_are_rejected() {
        let a = cube_surface();
        let b = cube_surface();
        let plane_a = Plane::new(Point3::origin(), Vector3::y()).unwrap();
        let plane_b = Plane::new(Point3::new(0.0, 0.5, 0.0), Vector3::y()).unwrap();

        assert!(matches!(
            derive_landmarks(&a, &plane_a, &b, &plane_b, &SectionParams::default()),
            Err(AlignError::ParallelPlanes)
        ));
    }

    #[test]
    fn orthogonal_planes_yield_two_landmarks() {
        let a = cube_surface();
        let b = cube_surface();
        // Horizontal cut through the cube's center; vertical crossing
        // plane bisecting two opposite contour edges away from any
        // ring vertex
        let plane_a = Plane::new(Point3::origin(), Vector3::y()).unwrap();
        let plane_b = Plane::new(Point3::new(0.5, 0.0, 0.0), Vector3::x()).unwrap();

        let (p1, p2) =
            derive_landmarks(&a, &plane_a, &b, &plane_b, &SectionParams::default()).unwrap();

        assert_relative_eq!(p1.x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(p2.x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(p1.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p2.y, 0.0, epsilon = 1e-9);
        // The two landmarks sit on opposite sides of the contour
        assert!((p1.z - p2.z).abs() > 1.0);
    }

    #[test]
    fn fallback_swaps_surfaces_when_first_attempt_is_dry() {
        // Surface A sits at x=100: its contour under plane_a never
        // reaches plane_b, so the first attempt finds no crossings.
        // The swapped attempt cuts B at the origin and succeeds.
        let a = ScanSurface::new(
            cube(2.0),
            RigidPose::from_translation(Vector3::new(100.0, 0.0, 0.0)),
        );
        let b = cube_surface();

        let plane_a = Plane::new(Point3::origin(), Vector3::y()).unwrap();
        let plane_b = Plane::new(Point3::new(0.5, 0.0, 0.0), Vector3::x()).unwrap();

        let (p1, p2) =
            derive_landmarks(&a, &plane_a, &b, &plane_b, &SectionParams::default()).unwrap();

        // B's vertical contour crossed with the horizontal plane:
        // points on opposite sides of the ring
        assert_relative_eq!(p1.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p2.y, 0.0, epsilon = 1e-9);
        assert!((p1 - p2).norm() > 1.0);
    }

    #[test]
    fn both_attempts_failing_reports_no_landmarks() {
        let a = cube_surface();
        let b = cube_surface();
        // Planes intersect each other far away from both cubes
        let plane_a = Plane::new(Point3::new(0.0, 50.0, 0.0), Vector3::y()).unwrap();
        let plane_b = Plane::new(Point3::new(50.0, 0.0, 0.0), Vector3::x()).unwrap();

        assert!(matches!(
            derive_landmarks(&a, &plane_a, &b, &plane_b, &SectionParams::default()),
            Err(AlignError::NoLandmarks)
        ));
    }
}
