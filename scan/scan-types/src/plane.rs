//! Plane in point-normal form.

use crate::RigidPose;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane in 3D space defined by an anchor point and a unit normal.
///
/// The plane equation is `normal · (p - point) = 0`, or equivalently
/// `normal · p = offset` where `offset = normal · point`.
///
/// Planes are immutable once constructed: selection planes are derived
/// from a picked face and a probe-computed anchor and never edited
/// afterwards.
///
/// # Example
///
/// ```
/// use scan_types::{Plane, Point3, Vector3};
///
/// let plane = Plane::new(
///     Point3::new(0.0, 2.0, 0.0),
///     Vector3::new(0.0, 3.0, 0.0), // not normalized
/// )
/// .unwrap();
///
/// assert!((plane.normal().norm() - 1.0).abs() < 1e-12);
/// assert!((plane.signed_distance(&Point3::new(5.0, 3.0, 1.0)) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    point: Point3<f64>,
    normal: Vector3<f64>,
}

impl Plane {
    /// Create a new plane from an anchor point and a normal.
    ///
    /// The normal is normalized. Returns `None` if the normal is zero.
    #[must_use]
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let norm = normal.norm();
        if norm < f64::EPSILON {
            return None;
        }
        Some(Self {
            point,
            normal: normal / norm,
        })
    }

    /// Create a plane from three non-collinear points.
    ///
    /// The normal is `(p1 - p0) × (p2 - p0)`, normalized. Returns `None`
    /// if the points are collinear.
    #[must_use]
    pub fn from_points(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Option<Self> {
        let normal = (p1 - p0).cross(&(p2 - p0));
        Self::new(p0, normal)
    }

    /// The anchor point of the plane.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Point3<f64> {
        self.point
    }

    /// The unit normal of the plane.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// The signed offset `d` where the plane equation is `n · p = d`.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.normal.dot(&self.point.coords)
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the side the normal points to, negative on the other.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.point))
    }

    /// Absolute distance from a point to the plane.
    #[inline]
    #[must_use]
    pub fn distance(&self, point: &Point3<f64>) -> f64 {
        self.signed_distance(point).abs()
    }

    /// Project a point onto the plane.
    #[must_use]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        point - self.signed_distance(point) * self.normal
    }

    /// Check whether two planes are parallel within a tolerance on the
    /// cross-product magnitude of their normals.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, tolerance: f64) -> bool {
        self.normal.cross(&other.normal).norm() <= tolerance
    }

    /// Direction of the intersection line of two planes.
    ///
    /// Returns `None` when the planes are parallel or near-parallel
    /// (cross product magnitude ≈ 0): there is no intersection line.
    ///
    /// # Example
    ///
    /// ```
    /// use scan_types::{Plane, Point3, Vector3};
    ///
    /// let a = Plane::new(Point3::origin(), Vector3::y()).unwrap();
    /// let b = Plane::new(Point3::origin(), Vector3::z()).unwrap();
    /// let dir = a.intersection_direction(&b).unwrap();
    /// assert!((dir.x.abs() - 1.0).abs() < 1e-12);
    ///
    /// let c = Plane::new(Point3::new(0.0, 5.0, 0.0), Vector3::y()).unwrap();
    /// assert!(a.intersection_direction(&c).is_none());
    /// ```
    #[must_use]
    pub fn intersection_direction(&self, other: &Self) -> Option<Vector3<f64>> {
        let cross = self.normal.cross(&other.normal);
        let norm = cross.norm();
        if norm < 1e-9 {
            return None;
        }
        Some(cross / norm)
    }

    /// Map the plane through a rigid pose.
    ///
    /// Transforms both the anchor point and the normal. Passing the
    /// inverse of a mesh's world pose brings a world-space plane into
    /// that mesh's local frame.
    #[must_use]
    pub fn transformed(&self, pose: &RigidPose) -> Self {
        Self {
            point: pose.transform_point(&self.point),
            // Rigid rotation preserves unit length
            normal: pose.transform_vector(&self.normal),
        }
    }
}
