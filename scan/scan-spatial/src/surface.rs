//! A scanned surface with its world pose and cached spatial index.

use crate::{TriangleBvh, DEFAULT_LEAF_SIZE};
use scan_types::{RigidPose, ScanMesh};
use std::cell::OnceCell;
use tracing::debug;

/// A scanned mesh together with its rigid world pose and a lazily
/// built triangle index.
///
/// The index is built in the mesh's local frame on first use and
/// cached for the surface's lifetime. Pose changes never invalidate it
/// (the index is pose-independent); geometry changes would, but scan
/// data is static, so invalidation is explicit and manual via
/// [`ScanSurface::invalidate_index`].
///
/// # Example
///
/// ```
/// use scan_spatial::ScanSurface;
/// use scan_types::{cube, RigidPose};
///
/// let surface = ScanSurface::new(cube(2.0), RigidPose::identity());
/// assert_eq!(surface.index().triangle_count(), 12);
/// ```
#[derive(Debug)]
pub struct ScanSurface {
    mesh: ScanMesh,
    pose: RigidPose,
    index: OnceCell<TriangleBvh>,
}

impl ScanSurface {
    /// Create a surface from a mesh and its world pose.
    ///
    /// The spatial index is not built until first queried.
    #[must_use]
    pub const fn new(mesh: ScanMesh, pose: RigidPose) -> Self {
        Self {
            mesh,
            pose,
            index: OnceCell::new(),
        }
    }

    /// The mesh geometry, in its local frame.
    #[inline]
    #[must_use]
    pub const fn mesh(&self) -> &ScanMesh {
        &self.mesh
    }

    /// The rigid world pose.
    #[inline]
    #[must_use]
    pub const fn pose(&self) -> &RigidPose {
        &self.pose
    }

    /// Replace the world pose.
    ///
    /// The cached index is untouched: it lives in the local frame.
    /// Must not be called while a rotation animation on this surface's
    /// assembly is in flight.
    pub fn set_pose(&mut self, pose: RigidPose) {
        self.pose = pose;
    }

    /// The triangle index, building and caching it on first use.
    #[must_use]
    pub fn index(&self) -> &TriangleBvh {
        self.index.get_or_init(|| {
            let bvh = TriangleBvh::build(&self.mesh, DEFAULT_LEAF_SIZE);
            debug!(
                triangles = bvh.triangle_count(),
                "built triangle index for surface"
            );
            bvh
        })
    }

    /// Drop the cached index so the next query rebuilds it.
    ///
    /// Only needed if the mesh geometry is mutated, which this system
    /// never does on its own.
    pub fn invalidate_index(&mut self) {
        self.index.take();
    }
}
