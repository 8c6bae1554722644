//! Raw segment extraction from a plane-surface cut.

use crate::{stitch_segments, SectionParams};
use nalgebra::Point3;
use scan_spatial::ScanSurface;
use scan_types::{Contour, Plane, Segment, Triangle};
use tracing::debug;

/// Extract the unordered intersection segments of a world-space plane
/// with a surface.
///
/// The plane is brought into the mesh's local frame through the
/// inverse of the surface's pose, candidate triangles come from the
/// cached index, and surviving segments are mapped back to world
/// space. Triangles entirely on one side of the plane contribute
/// nothing; a plane outside the surface's extent yields an empty set.
///
/// # Example
///
/// ```
/// use scan_section::{extract_section, SectionParams};
/// use scan_spatial::ScanSurface;
/// use scan_types::{cube, Plane, Point3, RigidPose, Vector3};
///
/// let surface = ScanSurface::new(cube(2.0), RigidPose::identity());
/// let plane = Plane::new(Point3::origin(), Vector3::y()).unwrap();
///
/// let segments = extract_section(&surface, &plane, &SectionParams::default());
/// assert_eq!(segments.len(), 8);
/// ```
#[must_use]
pub fn extract_section(
    surface: &ScanSurface,
    plane: &Plane,
    params: &SectionParams,
) -> Vec<Segment> {
    let mesh = surface.mesh();
    if mesh.is_empty() {
        return Vec::new();
    }

    let pose = *surface.pose();
    let local_plane = plane.transformed(&pose.inverse());
    let candidates = surface.index().candidates_near_plane(&local_plane);

    let mut segments = Vec::new();
    for &face in &candidates {
        let Some(tri) = mesh.triangle(face as usize) else {
            continue;
        };
        if let Some((a, b)) = triangle_cut(&tri, &local_plane, params.triangle_merge_tolerance) {
            segments.push(Segment::new(
                pose.transform_point(&a),
                pose.transform_point(&b),
            ));
        }
    }

    debug!(
        candidates = candidates.len(),
        segments = segments.len(),
        "extracted section segments"
    );
    segments
}

/// Extract and stitch the full contour of a plane-surface cut.
///
/// All disjoint polyline components are retained; see
/// [`Contour::primary`] for the component the alignment solve consumes.
#[must_use]
pub fn extract_contour(surface: &ScanSurface, plane: &Plane, params: &SectionParams) -> Contour {
    let segments = extract_section(surface, plane, params);
    let polylines = stitch_segments(&segments, params.stitch_tolerance);
    debug!(polylines = polylines.len(), "stitched contour");
    Contour::new(polylines)
}

/// Cut one triangle with the plane.
///
/// Tests the three edges with the exact line-plane solve, merging raw
/// points closer than `merge_tolerance`. A vertex-touching triangle
/// collapses to a single point and yields no segment; a coplanar or
/// vertex-crossing cut that reports all three edges is reduced to the
/// two distinct points.
fn triangle_cut(
    tri: &Triangle,
    plane: &Plane,
    merge_tolerance: f64,
) -> Option<(Point3<f64>, Point3<f64>)> {
    let mut points: [Point3<f64>; 3] = [Point3::origin(); 3];
    let mut count = 0;

    for (a, b) in tri.edges() {
        let Some(p) = edge_plane_intersection(&a, &b, plane) else {
            continue;
        };
        // Merge with an earlier raw point if within tolerance
        if points[..count]
            .iter()
            .any(|q| (p - q).norm() <= merge_tolerance)
        {
            continue;
        }
        if count < 3 {
            points[count] = p;
            count += 1;
        }
    }

    if count >= 2 {
        Some((points[0], points[1]))
    } else {
        None
    }
}

/// Exact line-plane intersection clamped to the edge.
fn edge_plane_intersection(a: &Point3<f64>, b: &Point3<f64>, plane: &Plane) -> Option<Point3<f64>> {
    let d_a = plane.signed_distance(a);
    let d_b = plane.signed_distance(b);

    // Same strict side: no crossing
    if d_a * d_b > 0.0 {
        return None;
    }

    let denom = d_a - d_b;
    if denom.abs() < 1e-12 {
        // Edge parallel to (or inside) the plane
        return None;
    }

    let t = d_a / denom;
    Some(a + (b - a) * t)
}
