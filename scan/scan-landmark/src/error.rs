//! Error types for the alignment solve.

use thiserror::Error;

/// Errors that can occur while solving an alignment.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The picked surface has no triangles.
    #[error("surface has no triangles")]
    EmptySurface,

    /// The picked face normal is zero or near-zero.
    #[error("picked face normal is degenerate")]
    DegeneratePick,

    /// The two selection planes are parallel or near-parallel, so they
    /// have no intersection line.
    #[error("selection planes are parallel, no intersection line")]
    ParallelPlanes,

    /// Neither surface's contour crossed the other plane; no landmark
    /// points could be derived. The assembly is left unrotated.
    #[error("no landmark points found on either surface")]
    NoLandmarks,
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;
