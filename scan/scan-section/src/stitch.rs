//! Segment stitching.

use scan_types::{Polyline, Segment};

/// Stitch unordered segments into ordered polylines.
///
/// Seeds a polyline from the first unused segment, then repeatedly
/// scans the remaining segments and extends the chain from either end
/// (prepending or appending, reversing the segment as needed) whenever
/// an endpoint coincides with a chain endpoint within `tolerance`.
/// When a full pass makes no extension the polyline is finalized and
/// the next one is seeded. Each pass consumes at least one segment or
/// stops, so termination is guaranteed.
///
/// A chain whose two ends meet is marked closed and the duplicate
/// closing point dropped. The output order is seed-discovery order and
/// carries no meaning; the result is invariant to input permutation up
/// to point-sequence reversal.
///
/// # Example
///
/// ```
/// use scan_section::stitch_segments;
/// use scan_types::{Point3, Segment};
///
/// let segments = vec![
///     Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
///     Segment::new(Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
///     Segment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
///     Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 0.0, 0.0)),
/// ];
///
/// let polylines = stitch_segments(&segments, 1e-6);
/// assert_eq!(polylines.len(), 1);
/// assert!(polylines[0].is_closed());
/// assert_eq!(polylines[0].len(), 4);
/// ```
#[must_use]
pub fn stitch_segments(segments: &[Segment], tolerance: f64) -> Vec<Polyline> {
    let mut remaining: Vec<Segment> = segments.to_vec();
    let mut polylines = Vec::new();

    while !remaining.is_empty() {
        let seed = remaining.remove(0);
        let mut points = vec![seed.start, seed.end];

        let mut changed = true;
        while changed {
            changed = false;

            let start = points[0];
            let end = points[points.len() - 1];

            for i in (0..remaining.len()).rev() {
                let seg = remaining[i];

                if (seg.start - end).norm() < tolerance {
                    points.push(seg.end);
                    remaining.remove(i);
                    changed = true;
                } else if (seg.end - end).norm() < tolerance {
                    points.push(seg.start);
                    remaining.remove(i);
                    changed = true;
                } else if (seg.start - start).norm() < tolerance {
                    points.insert(0, seg.end);
                    remaining.remove(i);
                    changed = true;
                } else if (seg.end - start).norm() < tolerance {
                    points.insert(0, seg.start);
                    remaining.remove(i);
                    changed = true;
                }

                if changed {
                    break;
                }
            }
        }

        polylines.push(finalize_chain(points, tolerance));
    }

    polylines
}

/// Detect ring closure and drop the duplicate closing point.
fn finalize_chain(mut points: Vec<scan_types::Point3<f64>>, tolerance: f64) -> Polyline {
    if points.len() >= 4 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (last - first).norm() < tolerance {
            points.pop();
            return Polyline::closed(points);
        }
    }
    Polyline::open(points)
}
