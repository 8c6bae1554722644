//! Pick events from the viewer.

use nalgebra::{Point3, Vector3};

/// A user pick on a surface, as delivered by the rendering
/// collaborator's raycaster.
///
/// Both the intersection point and the face normal are in the mesh's
/// **local frame**; the solver maps derived quantities to world space
/// through the surface's pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePick {
    /// Index of the picked face.
    pub face: u32,
    /// Intersection point on the face, in the mesh local frame.
    pub point: Point3<f64>,
    /// Outward face normal, in the mesh local frame.
    pub normal: Vector3<f64>,
}

impl FacePick {
    /// Create a pick event.
    #[must_use]
    pub const fn new(face: u32, point: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            face,
            point,
            normal,
        }
    }
}
