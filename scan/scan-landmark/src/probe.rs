//! Selection-plane construction from picks.

use crate::{AlignError, AlignResult, FacePick};
use scan_spatial::{ray_hits, Ray, ScanSurface};
use scan_types::{Plane, Point3};
use tracing::debug;

/// Parameters for the probe ray that anchors a selection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeParams {
    /// How far above the pick point (along the outward normal) the
    /// probe ray starts before it is cast back through the shell.
    pub lift: f64,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self { lift: 0.5 }
    }
}

impl ProbeParams {
    /// Create parameters with the default lift.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probe lift distance.
    #[must_use]
    pub const fn with_lift(mut self, lift: f64) -> Self {
        self.lift = lift;
        self
    }
}

/// Build a selection plane from a picked face.
///
/// A scanned surface is a thin shell; anchoring the plane at the raw
/// pick point would place it on the outer skin. Instead a probe ray is
/// cast from slightly above the pick point, along the inward normal,
/// against the same surface; the midpoint of the two nearest hits
/// (outer and inner skin) anchors the plane at mid-shell. When the
/// probe finds fewer than two hits the raw pick point is used.
///
/// The plane's normal is the picked face normal. Both anchor and
/// normal are returned in world space.
///
/// # Errors
///
/// [`AlignError::EmptySurface`] for a surface without triangles,
/// [`AlignError::DegeneratePick`] for a zero pick normal.
pub fn selection_plane(
    surface: &ScanSurface,
    pick: &FacePick,
    params: &ProbeParams,
) -> AlignResult<Plane> {
    if surface.mesh().is_empty() {
        return Err(AlignError::EmptySurface);
    }

    let norm = pick.normal.norm();
    if norm < f64::EPSILON {
        return Err(AlignError::DegeneratePick);
    }
    let normal = pick.normal / norm;

    // Probe inward from just above the surface
    let ray = Ray::new(pick.point + normal * params.lift, -normal);
    let hits = ray_hits(surface.mesh(), surface.index(), &ray);

    let anchor_local = if hits.len() >= 2 {
        Point3::from((hits[0].point.coords + hits[1].point.coords) * 0.5)
    } else {
        debug!(
            hits = hits.len(),
            "probe found fewer than two hits, anchoring at the pick point"
        );
        pick.point
    };

    let pose = surface.pose();
    Plane::new(
        pose.transform_point(&anchor_local),
        pose.transform_vector(&normal),
    )
    .ok_or(AlignError::DegeneratePick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scan_types::{cube, RigidPose, Vector3};

    fn cube_surface() -> ScanSurface {
        ScanSurface::new(cube(2.0), RigidPose::identity())
    }

    #[test]
    fn probe_anchors_at_mid_shell() {
        let surface = cube_surface();
        // Pick the top face; the probe passes through top and bottom
        let pick = FacePick::new(6, Point3::new(0.2, 1.0, -0.3), Vector3::y());

        let plane = selection_plane(&surface, &pick, &ProbeParams::default()).unwrap();

        // Midpoint between y=1 (outer) and y=-1 (inner) skins
        assert_relative_eq!(plane.point().y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(plane.normal().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn probe_anchor_is_mapped_to_world_space() {
        let pose = RigidPose::from_translation(Vector3::new(0.0, 10.0, 0.0));
        let surface = ScanSurface::new(cube(2.0), pose);
        let pick = FacePick::new(6, Point3::new(0.2, 1.0, -0.3), Vector3::y());

        let plane = selection_plane(&surface, &pick, &ProbeParams::default()).unwrap();
        assert_relative_eq!(plane.point().y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_normal_is_rejected() {
        let surface = cube_surface();
        let pick = FacePick::new(0, Point3::origin(), Vector3::zeros());
        assert!(matches!(
            selection_plane(&surface, &pick, &ProbeParams::default()),
            Err(AlignError::DegeneratePick)
        ));
    }

    #[test]
    fn empty_surface_is_rejected() {
        let surface = ScanSurface::new(scan_types::ScanMesh::new(), RigidPose::identity());
        let pick = FacePick::new(0, Point3::origin(), Vector3::y());
        assert!(matches!(
            selection_plane(&surface, &pick, &ProbeParams::default()),
            Err(AlignError::EmptySurface)
        ));
    }

    #[test]
    fn probe_miss_falls_back_to_pick_point() {
        let surface = cube_surface();
        // A pick point beside the cube: the inward probe misses the
        // mesh entirely
        let pick = FacePick::new(6, Point3::new(5.0, 1.0, 0.0), Vector3::y());

        let plane = selection_plane(&surface, &pick, &ProbeParams::default()).unwrap();
        assert_relative_eq!(plane.point().x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(plane.point().y, 1.0, epsilon = 1e-12);
    }
}
