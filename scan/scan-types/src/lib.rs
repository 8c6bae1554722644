//! Core geometry types for ScanAlign.
//!
//! This crate provides the foundational types shared by the alignment
//! pipeline:
//!
//! - [`ScanMesh`] - An indexed triangle mesh of a scanned surface
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Plane`] - A plane in point-normal form
//! - [`Segment`] - A single triangle-plane intersection segment
//! - [`Polyline`] / [`Contour`] - Stitched cross-section curves
//! - [`RigidPose`] - Rigid world transform of a scanned surface
//! - [`RotationAxis`] - The three canonical single rotation axes
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** with the anatomical
//! conventions of the viewer:
//! - X: lateral (left/right)
//! - Y: height (up/down)
//! - Z: depth (front/back)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Scanned input is typically millimeters.
//!
//! # Example
//!
//! ```
//! use scan_types::{Plane, Point3, Vector3};
//!
//! let cube = scan_types::cube(2.0);
//! assert_eq!(cube.face_count(), 12);
//!
//! let plane = Plane::new(Point3::origin(), Vector3::y()).unwrap();
//! assert!(plane.signed_distance(&Point3::new(0.0, 1.0, 0.0)) > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod axis;
mod bounds;
mod mesh;
mod plane;
mod polyline;
mod pose;
mod segment;
mod triangle;

pub use axis::RotationAxis;
pub use bounds::Aabb;
pub use mesh::{cube, icosahedron, ScanMesh};
pub use plane::Plane;
pub use polyline::{Contour, Polyline};
pub use pose::RigidPose;
pub use segment::Segment;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
