//! Bounding volume hierarchy for plane and box culling.
//!
//! Cross-section extraction visits only the triangles whose bounding
//! boxes a cutting plane can touch; the BVH turns the per-cut triangle
//! test from O(n) into O(log n + k).

use scan_types::{Aabb, Plane, ScanMesh};
use smallvec::SmallVec;

/// Default maximum triangles per leaf.
///
/// Small leaves keep plane culling fine-grained: the exact per-triangle
/// test downstream sees few false positives.
pub const DEFAULT_LEAF_SIZE: usize = 3;

/// BVH node containing either leaf triangles or two children.
#[derive(Debug)]
enum Node {
    Leaf {
        bbox: Aabb,
        triangles: SmallVec<[u32; 4]>,
    },
    Internal {
        bbox: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn bbox(&self) -> &Aabb {
        match self {
            Self::Leaf { bbox, .. } | Self::Internal { bbox, .. } => bbox,
        }
    }
}

/// A bounding volume hierarchy over a mesh's triangles.
///
/// Built in the mesh's local frame; poses are applied by callers, so a
/// surface that merely moves never needs a rebuild.
///
/// # Example
///
/// ```
/// use scan_spatial::TriangleBvh;
/// use scan_types::{cube, Plane, Point3, Vector3};
///
/// let mesh = cube(2.0);
/// let bvh = TriangleBvh::build(&mesh, 3);
///
/// let plane = Plane::new(Point3::origin(), Vector3::y()).unwrap();
/// let candidates = bvh.candidates_near_plane(&plane);
/// assert!(!candidates.is_empty());
/// ```
#[derive(Debug)]
pub struct TriangleBvh {
    root: Option<Node>,
    triangle_count: usize,
}

impl TriangleBvh {
    /// Build a BVH from a mesh.
    ///
    /// # Arguments
    ///
    /// * `mesh` - The mesh to index
    /// * `max_leaf_size` - Maximum triangles per leaf node (clamped to
    ///   at least 1); see [`DEFAULT_LEAF_SIZE`]
    #[must_use]
    pub fn build(mesh: &ScanMesh, max_leaf_size: usize) -> Self {
        let boxes = triangle_boxes(mesh);
        if boxes.is_empty() {
            return Self {
                root: None,
                triangle_count: 0,
            };
        }

        let indices: Vec<usize> = (0..boxes.len()).collect();
        let root = build_recursive(&boxes, indices, max_leaf_size.max(1), usize::MAX);

        Self {
            root: Some(root),
            triangle_count: boxes.len(),
        }
    }

    /// Build a BVH using parallel construction for large meshes.
    ///
    /// Subtrees with at least `parallel_threshold` triangles are built
    /// on rayon's thread pool. Construction happens before any query
    /// or animation runs, so the parallelism stays internal.
    #[must_use]
    pub fn build_parallel(mesh: &ScanMesh, max_leaf_size: usize, parallel_threshold: usize) -> Self {
        let boxes = triangle_boxes(mesh);
        if boxes.is_empty() {
            return Self {
                root: None,
                triangle_count: 0,
            };
        }

        let indices: Vec<usize> = (0..boxes.len()).collect();
        let root = build_recursive(
            &boxes,
            indices,
            max_leaf_size.max(1),
            parallel_threshold.max(2),
        );

        Self {
            root: Some(root),
            triangle_count: boxes.len(),
        }
    }

    /// Triangles whose bounding boxes straddle the plane.
    ///
    /// Conservative: never omits a triangle that truly intersects the
    /// plane; the exact triangle-plane test downstream filters the
    /// false positives.
    #[must_use]
    pub fn candidates_near_plane(&self, plane: &Plane) -> Vec<u32> {
        let mut result = Vec::new();
        if let Some(ref root) = self.root {
            collect_near_plane(root, plane, &mut result);
        }
        result
    }

    /// Triangles whose bounding boxes intersect the query box.
    #[must_use]
    pub fn candidates_in_aabb(&self, query: &Aabb) -> Vec<u32> {
        let mut result = Vec::new();
        if let Some(ref root) = self.root {
            collect_in_aabb(root, query, &mut result);
        }
        result
    }

    /// Visit leaf triangle lists whose boxes pass the given node-box
    /// predicate.
    ///
    /// Internal traversal hook for query shapes the fixed methods do
    /// not cover (e.g. rays).
    pub(crate) fn visit_leaves<P, V>(&self, mut predicate: P, mut visitor: V)
    where
        P: FnMut(&Aabb) -> bool,
        V: FnMut(&[u32]),
    {
        fn walk<P, V>(node: &Node, predicate: &mut P, visitor: &mut V)
        where
            P: FnMut(&Aabb) -> bool,
            V: FnMut(&[u32]),
        {
            match node {
                Node::Leaf { bbox, triangles } => {
                    if predicate(bbox) {
                        visitor(triangles);
                    }
                }
                Node::Internal { bbox, left, right } => {
                    if predicate(bbox) {
                        walk(left, predicate, visitor);
                        walk(right, predicate, visitor);
                    }
                }
            }
        }

        if let Some(ref root) = self.root {
            walk(root, &mut predicate, &mut visitor);
        }
    }

    /// Total number of triangles in the BVH.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Whether the BVH indexes no triangles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Bounding box of the whole indexed mesh, if non-empty.
    #[must_use]
    pub fn root_bounds(&self) -> Option<&Aabb> {
        self.root.as_ref().map(Node::bbox)
    }

    /// Structure statistics, for diagnostics.
    #[must_use]
    pub fn stats(&self) -> BvhStats {
        let mut stats = BvhStats::default();
        if let Some(ref root) = self.root {
            collect_stats(root, 0, &mut stats);
        }
        stats
    }
}

/// Statistics about BVH structure.
#[derive(Debug, Default, Clone)]
pub struct BvhStats {
    /// Number of internal (branch) nodes.
    pub internal_count: usize,
    /// Number of leaf nodes.
    pub leaf_count: usize,
    /// Maximum depth of the tree.
    pub max_depth: usize,
    /// Maximum number of triangles in any leaf.
    pub max_leaf_size: usize,
}

#[allow(clippy::cast_possible_truncation)]
fn triangle_boxes(mesh: &ScanMesh) -> Vec<(u32, Aabb)> {
    (0..mesh.face_count())
        .filter_map(|i| {
            let tri = mesh.triangle(i)?;
            Some((i as u32, tri.aabb()))
        })
        .collect()
}

fn build_recursive(
    boxes: &[(u32, Aabb)],
    indices: Vec<usize>,
    max_leaf_size: usize,
    parallel_threshold: usize,
) -> Node {
    let mut bbox = Aabb::empty();
    for &i in &indices {
        bbox = bbox.union(&boxes[i].1);
    }

    if indices.len() <= max_leaf_size {
        return Node::Leaf {
            bbox,
            triangles: indices.iter().map(|&i| boxes[i].0).collect(),
        };
    }

    // Median split on the longest axis
    let axis = bbox.longest_axis();
    let mut sorted = indices;
    sorted.sort_by(|&a, &b| {
        let ca = boxes[a].1.center()[axis];
        let cb = boxes[b].1.center()[axis];
        ca.partial_cmp(&cb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mid = sorted.len() / 2;
    let right_indices = sorted.split_off(mid);
    let left_indices = sorted;

    let (left, right) =
        if left_indices.len() >= parallel_threshold || right_indices.len() >= parallel_threshold {
            rayon::join(
                || build_recursive(boxes, left_indices, max_leaf_size, parallel_threshold),
                || build_recursive(boxes, right_indices, max_leaf_size, parallel_threshold),
            )
        } else {
            (
                build_recursive(boxes, left_indices, max_leaf_size, usize::MAX),
                build_recursive(boxes, right_indices, max_leaf_size, usize::MAX),
            )
        };

    Node::Internal {
        bbox,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn collect_near_plane(node: &Node, plane: &Plane, result: &mut Vec<u32>) {
    match node {
        Node::Leaf { bbox, triangles } => {
            if bbox.intersects_plane(plane) {
                result.extend(triangles.iter().copied());
            }
        }
        Node::Internal { bbox, left, right } => {
            if bbox.intersects_plane(plane) {
                collect_near_plane(left, plane, result);
                collect_near_plane(right, plane, result);
            }
        }
    }
}

fn collect_in_aabb(node: &Node, query: &Aabb, result: &mut Vec<u32>) {
    match node {
        Node::Leaf { bbox, triangles } => {
            if bbox.intersects(query) {
                result.extend(triangles.iter().copied());
            }
        }
        Node::Internal { bbox, left, right } => {
            if bbox.intersects(query) {
                collect_in_aabb(left, query, result);
                collect_in_aabb(right, query, result);
            }
        }
    }
}

fn collect_stats(node: &Node, depth: usize, stats: &mut BvhStats) {
    stats.max_depth = stats.max_depth.max(depth);
    match node {
        Node::Leaf { triangles, .. } => {
            stats.leaf_count += 1;
            stats.max_leaf_size = stats.max_leaf_size.max(triangles.len());
        }
        Node::Internal { left, right, .. } => {
            stats.internal_count += 1;
            collect_stats(left, depth + 1, stats);
            collect_stats(right, depth + 1, stats);
        }
    }
}
