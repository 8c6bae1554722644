//! Spatial acceleration for ScanAlign.
//!
//! This crate provides:
//!
//! - [`TriangleBvh`] - A bounding volume hierarchy over a mesh's
//!   triangles, answering "which triangles can possibly intersect this
//!   plane" (and box/ray variants) without false negatives
//! - [`Ray`] / [`RayHit`] / [`ray_hits`] - BVH-accelerated ray casting
//! - [`ScanSurface`] - A mesh plus its rigid world pose and a lazily
//!   built, cached triangle index
//!
//! The index is built once per surface and reused for the surface's
//! lifetime; scan geometry is static, so rebuilding is never triggered
//! automatically. A caller that does mutate geometry must call
//! [`ScanSurface::invalidate_index`] explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bvh;
mod ray;
mod surface;

pub use bvh::{BvhStats, TriangleBvh, DEFAULT_LEAF_SIZE};
pub use ray::{ray_hits, Ray, RayHit};
pub use surface::ScanSurface;
