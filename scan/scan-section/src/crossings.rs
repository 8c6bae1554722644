//! Contour-plane crossings.

use nalgebra::Point3;
use scan_types::{Plane, Polyline};

/// Find where a polyline crosses a plane.
///
/// Walks the polyline's edges in traversal order (including the wrap
/// edge of a closed ring) and reports the exact line-plane crossing of
/// every edge whose endpoint signed distances differ in sign, counting
/// an exactly-zero distance as a boundary crossing. No deduplication
/// is applied: a vertex lying exactly on the plane is reported once
/// per adjacent edge. Zero crossings is a normal outcome, not an
/// error.
///
/// # Example
///
/// ```
/// use scan_section::plane_crossings;
/// use scan_types::{Plane, Point3, Polyline, Vector3};
///
/// let square = Polyline::closed(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(2.0, 2.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
/// ]);
///
/// // Vertical plane bisecting the bottom and top edges
/// let plane = Plane::new(Point3::new(1.0, 0.0, 0.0), Vector3::x()).unwrap();
/// let crossings = plane_crossings(&square, &plane);
/// assert_eq!(crossings.len(), 2);
/// ```
#[must_use]
pub fn plane_crossings(polyline: &Polyline, plane: &Plane) -> Vec<Point3<f64>> {
    let mut crossings = Vec::new();

    for (a, b) in polyline.edges() {
        let d_a = plane.signed_distance(&a);
        let d_b = plane.signed_distance(&b);

        // Strictly same side: no crossing
        if d_a * d_b > 0.0 {
            continue;
        }

        let denom = d_a - d_b;
        if denom.abs() < f64::EPSILON {
            // Edge lies in the plane; no single crossing point
            continue;
        }

        let t = d_a / denom;
        crossings.push(a + (b - a) * t);
    }

    crossings
}
