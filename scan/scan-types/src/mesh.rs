//! Indexed triangle mesh of a scanned surface.

use crate::{Aabb, Triangle};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// This is the geometry half of a scanned surface; the world transform
/// lives alongside it in the surface wrapper. Scan data is static, so
/// the mesh is treated as immutable once loaded.
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - vertex positions
/// - `faces`: `Vec<[u32; 3]>` - triangles as vertex indices,
///   counter-clockwise when viewed from outside
///
/// # Example
///
/// ```
/// use scan_types::{Point3, ScanMesh};
///
/// let mut mesh = ScanMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.face_count(), 1);
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into the position array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl ScanMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from positions and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// Returns an empty mesh if either slice length is not divisible
    /// by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use scan_types::ScanMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = ScanMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let positions = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { positions, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no usable geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Get a face by index.
    #[inline]
    #[must_use]
    pub fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    /// Get a triangle by face index with resolved vertex positions.
    ///
    /// Returns `None` if the face index or any vertex index is out of
    /// bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let face = self.faces.get(face_index)?;
        Some(Triangle::new(
            *self.positions.get(face[0] as usize)?,
            *self.positions.get(face[1] as usize)?,
            *self.positions.get(face[2] as usize)?,
        ))
    }

    /// Iterate over all triangles with resolved vertex positions.
    ///
    /// Faces with out-of-bounds vertex indices are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }

    /// Compute the axis-aligned bounding box of all vertices.
    ///
    /// Returns an empty AABB for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

/// An axis-aligned cube of the given edge length, centered at the
/// origin.
///
/// 8 vertices, 12 triangles, CCW winding viewed from outside. Useful as
/// deterministic test and demo geometry.
///
/// # Example
///
/// ```
/// use scan_types::cube;
///
/// let mesh = cube(2.0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
#[must_use]
pub fn cube(edge: f64) -> ScanMesh {
    let h = edge * 0.5;
    let positions = vec![
        Point3::new(-h, -h, -h), // 0
        Point3::new(h, -h, -h),  // 1
        Point3::new(h, h, -h),   // 2
        Point3::new(-h, h, -h),  // 3
        Point3::new(-h, -h, h),  // 4
        Point3::new(h, -h, h),   // 5
        Point3::new(h, h, h),    // 6
        Point3::new(-h, h, h),   // 7
    ];

    let faces = vec![
        // Back face (z=-h), normal -Z
        [0, 2, 1],
        [0, 3, 2],
        // Front face (z=+h), normal +Z
        [4, 5, 6],
        [4, 6, 7],
        // Bottom face (y=-h), normal -Y
        [0, 1, 5],
        [0, 5, 4],
        // Top face (y=+h), normal +Y
        [3, 7, 6],
        [3, 6, 2],
        // Left face (x=-h), normal -X
        [0, 4, 7],
        [0, 7, 3],
        // Right face (x=+h), normal +X
        [1, 2, 6],
        [1, 6, 5],
    ];

    ScanMesh::from_parts(positions, faces)
}

/// A regular icosahedron of the given circumradius, centered at the
/// origin.
///
/// 12 vertices, 20 triangles, CCW winding viewed from outside. The
/// smallest convex closed mesh with non-trivial cross-sections, handy
/// for exercising contour extraction on slanted faces.
#[must_use]
pub fn icosahedron(radius: f64) -> ScanMesh {
    // Golden ratio; all 12 vertices lie at distance sqrt(1 + phi^2)
    let phi = (1.0 + 5.0_f64.sqrt()) * 0.5;
    let scale = radius / phi.hypot(1.0);
    let a = scale;
    let b = phi * scale;

    let positions = vec![
        Point3::new(-a, b, 0.0),  // 0
        Point3::new(a, b, 0.0),   // 1
        Point3::new(-a, -b, 0.0), // 2
        Point3::new(a, -b, 0.0),  // 3
        Point3::new(0.0, -a, b),  // 4
        Point3::new(0.0, a, b),   // 5
        Point3::new(0.0, -a, -b), // 6
        Point3::new(0.0, a, -b),  // 7
        Point3::new(b, 0.0, -a),  // 8
        Point3::new(b, 0.0, a),   // 9
        Point3::new(-b, 0.0, -a), // 10
        Point3::new(-b, 0.0, a),  // 11
    ];

    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    ScanMesh::from_parts(positions, faces)
}
