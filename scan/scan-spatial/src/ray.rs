//! BVH-accelerated ray casting.
//!
//! The alignment solver probes surfaces with rays to find the inner
//! and outer skin of a thin-shell scan; this module provides the
//! ray-mesh intersection it relies on.

use crate::TriangleBvh;
use nalgebra::{Point3, Vector3};
use scan_types::{Aabb, ScanMesh, Triangle};

// Below this the ray is treated as parallel to a triangle
const RAY_EPSILON: f64 = 1e-12;

/// A ray defined by an origin point and a direction vector.
///
/// The direction does not need to be normalized, but must be non-zero;
/// hit parameters `t` are in units of the direction's length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin of the ray.
    pub origin: Point3<f64>,
    /// The direction of the ray (not necessarily normalized).
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Create a new ray with the given origin and direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// The point along the ray at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// A single ray-mesh intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter at the hit, in units of the direction's length.
    pub t: f64,
    /// Hit position.
    pub point: Point3<f64>,
    /// Index of the hit face.
    pub face: u32,
}

/// Cast a ray against a mesh, returning all forward hits sorted by
/// distance.
///
/// Only hits with `t > 0` are reported. The mesh and ray must be in
/// the same (local) frame as the BVH.
///
/// # Example
///
/// ```
/// use scan_spatial::{ray_hits, Ray, TriangleBvh};
/// use scan_types::{cube, Point3, Vector3};
///
/// let mesh = cube(2.0);
/// let bvh = TriangleBvh::build(&mesh, 3);
///
/// // Straight through the cube: entry and exit
/// let ray = Ray::new(Point3::new(0.2, 5.0, -0.3), Vector3::new(0.0, -1.0, 0.0));
/// let hits = ray_hits(&mesh, &bvh, &ray);
/// assert_eq!(hits.len(), 2);
/// assert!(hits[0].t < hits[1].t);
/// ```
#[must_use]
pub fn ray_hits(mesh: &ScanMesh, bvh: &TriangleBvh, ray: &Ray) -> Vec<RayHit> {
    let mut hits = Vec::new();

    bvh.visit_leaves(
        |bbox| ray_intersects_aabb(ray, bbox),
        |triangles| {
            for &face in triangles {
                let Some(tri) = mesh.triangle(face as usize) else {
                    continue;
                };
                if let Some(t) = ray_triangle_intersect(ray, &tri) {
                    hits.push(RayHit {
                        t,
                        point: ray.point_at(t),
                        face,
                    });
                }
            }
        },
    );

    hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
    hits
}

/// Slab test for ray-AABB intersection, forward of the origin only.
fn ray_intersects_aabb(ray: &Ray, aabb: &Aabb) -> bool {
    let mut t_min: f64 = 0.0;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if dir.abs() < RAY_EPSILON {
            if origin < lo || origin > hi {
                return false;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
    }

    true
}

/// Moller-Trumbore ray-triangle intersection.
fn ray_triangle_intersect(ray: &Ray, tri: &Triangle) -> Option<f64> {
    let edge1 = tri.v1 - tri.v0;
    let edge2 = tri.v2 - tri.v0;

    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to the triangle plane
    if a.abs() < RAY_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - tri.v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    if t > RAY_EPSILON {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scan_types::{cube, icosahedron};

    #[test]
    fn ray_through_cube_hits_twice() {
        let mesh = cube(2.0);
        let bvh = TriangleBvh::build(&mesh, 3);
        let ray = Ray::new(Point3::new(0.2, 5.0, -0.3), Vector3::new(0.0, -1.0, 0.0));

        let hits = ray_hits(&mesh, &bvh, &ray);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].t, 4.0, epsilon = 1e-9);
        assert_relative_eq!(hits[1].t, 6.0, epsilon = 1e-9);
        assert_relative_eq!(hits[0].point.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(hits[1].point.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn ray_missing_mesh_has_no_hits() {
        let mesh = cube(2.0);
        let bvh = TriangleBvh::build(&mesh, 3);
        let ray = Ray::new(Point3::new(10.0, 0.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert!(ray_hits(&mesh, &bvh, &ray).is_empty());
    }

    #[test]
    fn backward_hits_are_not_reported() {
        let mesh = cube(2.0);
        let bvh = TriangleBvh::build(&mesh, 3);
        // Origin above the cube, pointing away from it
        let ray = Ray::new(Point3::new(0.2, 5.0, -0.3), Vector3::new(0.0, 1.0, 0.0));
        assert!(ray_hits(&mesh, &bvh, &ray).is_empty());
    }

    #[test]
    fn ray_from_inside_hits_exit_face() {
        let mesh = cube(2.0);
        let bvh = TriangleBvh::build(&mesh, 3);
        let ray = Ray::new(Point3::new(0.2, 0.0, -0.3), Vector3::new(0.0, -1.0, 0.0));

        let hits = ray_hits(&mesh, &bvh, &ray);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].t, 1.0, epsilon = 1e-9);
        assert_relative_eq!(hits[0].point.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn convex_mesh_entry_exit_ordering() {
        let mesh = icosahedron(2.0);
        let bvh = TriangleBvh::build(&mesh, 3);
        let ray = Ray::new(Point3::new(0.3, 5.0, 0.1), Vector3::new(0.0, -1.0, 0.0));

        let hits = ray_hits(&mesh, &bvh, &ray);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].point.y > hits[1].point.y);
    }
}
