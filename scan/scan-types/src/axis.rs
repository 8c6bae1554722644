//! Canonical rotation axes.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three canonical single rotation axes.
///
/// The alignment solve and the rotation animator both operate on one
/// fixed axis at a time; combined multi-axis rotations are never
/// produced.
///
/// # Example
///
/// ```
/// use scan_types::RotationAxis;
///
/// let axis = RotationAxis::Lateral;
/// assert_eq!(axis.unit_vector().x, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationAxis {
    /// The X axis (left/right).
    Lateral,
    /// The Y axis (up/down).
    Height,
    /// The Z axis (front/back).
    Depth,
}

impl RotationAxis {
    /// Get the unit vector for this axis.
    #[must_use]
    pub fn unit_vector(&self) -> Vector3<f64> {
        match self {
            Self::Lateral => Vector3::x(),
            Self::Height => Vector3::y(),
            Self::Depth => Vector3::z(),
        }
    }

    /// Get the coordinate index for this axis (0=X, 1=Y, 2=Z).
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Lateral => 0,
            Self::Height => 1,
            Self::Depth => 2,
        }
    }
}
