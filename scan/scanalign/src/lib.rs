//! Scan alignment toolkit.
//!
//! This umbrella crate re-exports the scan-* crate family, providing a
//! unified API for the alignment pipeline of the viewer: pick two
//! reference faces on scanned surfaces, extract the cross-section
//! contours those picks define, derive landmark points, and obtain the
//! two sequential single-axis rotations that bring the assembly into
//! its canonical orientation.
//!
//! # Quick Start
//!
//! ```
//! use scanalign::prelude::*;
//!
//! // Two scanned surfaces (unit test geometry stands in for scans)
//! let a = ScanSurface::new(cube(2.0), RigidPose::identity());
//! let b = ScanSurface::new(
//!     cube(2.0),
//!     RigidPose::from_translation(Vector3::new(0.5, 0.0, 0.0)),
//! );
//!
//! // Picks delivered by the viewer's raycaster
//! let pick_a = FacePick::new(6, Point3::new(0.2, 1.0, -0.3), Vector3::y());
//! let pick_b = FacePick::new(10, Point3::new(1.0, 0.3, 0.2), Vector3::x());
//!
//! // Solve and execute the first rotation
//! let mut solution =
//!     solve_alignment(&a, &pick_a, &b, &pick_b, &SolveParams::default()).unwrap();
//! let request = solution.plan.begin().unwrap();
//!
//! let mut animation = RotationAnimation::new(
//!     request.axis,
//!     0.0,
//!     request.angle,
//!     &AnimationParams::default(),
//! );
//! let angle = animation.advance(1.0);
//! assert!((angle - request.angle).abs() < 1e-12);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `ScanMesh`, `Plane`, `Polyline`,
//!   `Contour`, `RigidPose`
//! - [`spatial`] - Triangle BVH, ray casting, and the lazily indexed
//!   `ScanSurface`
//! - [`section`] - Contour extraction, segment stitching, and
//!   contour-plane crossings
//! - [`landmark`] - Selection planes, landmark derivation, and the
//!   two-phase rotation plan
//! - [`animate`] - Frame-driven eased rotation animation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use scan_animate as animate;
pub use scan_landmark as landmark;
pub use scan_section as section;
pub use scan_spatial as spatial;
pub use scan_types as types;

/// Commonly used items, re-exported flat.
pub mod prelude {
    pub use scan_animate::{AnimationParams, RotationAnimation};
    pub use scan_landmark::{
        derive_landmarks, first_phase_angle, second_phase_angle, selection_plane, solve_alignment,
        AlignError, AlignmentPhase, AlignmentPlan, AlignmentSolution, FacePick, ProbeParams,
        RotationRequest, SolveParams,
    };
    pub use scan_section::{
        extract_contour, extract_section, plane_crossings, stitch_segments, SectionParams,
    };
    pub use scan_spatial::{ray_hits, Ray, RayHit, ScanSurface, TriangleBvh};
    pub use scan_types::{
        cube, icosahedron, Aabb, Contour, Plane, Point3, Polyline, RigidPose, RotationAxis,
        ScanMesh, Segment, Triangle, UnitQuaternion, Vector3,
    };
}
