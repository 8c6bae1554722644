//! Stitched cross-section curves.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered point sequence where consecutive points are connected by a
/// real mesh edge crossing.
///
/// A closed polyline stores each point once; the edge from the last
/// point back to the first is implied by the `closed` flag.
///
/// # Example
///
/// ```
/// use scan_types::{Point3, Polyline};
///
/// let square = Polyline::closed(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
///
/// assert_eq!(square.len(), 4);
/// assert!((square.length() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    /// Ordered points along the curve.
    pub points: Vec<Point3<f64>>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Create an open polyline.
    #[inline]
    #[must_use]
    pub const fn open(points: Vec<Point3<f64>>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Create a closed polyline (ring).
    ///
    /// The closing edge from the last point back to the first is
    /// implied; do not repeat the first point at the end.
    #[inline]
    #[must_use]
    pub const fn closed(points: Vec<Point3<f64>>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polyline is a closed ring.
    #[inline]
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// First point, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// Last point, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// Iterate over the edges as point pairs, in traversal order.
    ///
    /// For a closed polyline, the final wrap edge from the last point
    /// back to the first is included.
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        let wrap = if self.closed && self.points.len() >= 2 {
            // Wrap pair (last, first)
            Some((self.points[self.points.len() - 1], self.points[0]))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(wrap)
    }

    /// Total length along the polyline.
    ///
    /// Includes the closing edge when the polyline is closed.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges().map(|(a, b)| (b - a).norm()).sum()
    }
}

/// The cross-section of a mesh under a cutting plane.
///
/// A mesh-plane cut may yield several disjoint polylines (e.g. when the
/// plane crosses separate lobes of a surface). All components are
/// retained here, in seed-discovery order; the order itself carries no
/// meaning. The alignment solver consumes only [`Contour::primary`],
/// the first-discovered component.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contour {
    /// The stitched polyline components.
    pub polylines: Vec<Polyline>,
}

impl Contour {
    /// Create a contour from stitched polylines.
    #[inline]
    #[must_use]
    pub const fn new(polylines: Vec<Polyline>) -> Self {
        Self { polylines }
    }

    /// The first-discovered polyline component, if any.
    #[inline]
    #[must_use]
    pub fn primary(&self) -> Option<&Polyline> {
        self.polylines.first()
    }

    /// Number of disjoint polyline components.
    #[inline]
    #[must_use]
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Whether the cut produced nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Summed length of all components.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.polylines.iter().map(Polyline::length).sum()
    }
}
