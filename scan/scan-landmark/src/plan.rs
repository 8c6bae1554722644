//! Two-phase rotation sequencing.

use crate::solve::{first_phase_angle, second_phase_angle};
use nalgebra::Point3;
use scan_types::RotationAxis;
use tracing::debug;

/// A single-axis rotation for the animator to execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
    /// The axis to rotate the assembly about.
    pub axis: RotationAxis,
    /// The rotation angle in radians.
    pub angle: f64,
}

/// Progress of the two-phase alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentPhase {
    /// No rotation issued yet.
    Idle,
    /// The first rotation (about the lateral axis) is in flight.
    RotatingFirst,
    /// The first rotation finished; the second has not been issued.
    AwaitingSecond,
    /// The second rotation (about the depth axis) is in flight.
    RotatingSecond,
    /// Both rotations finished.
    Done,
}

/// Sequences the two alignment rotations on real completion events.
///
/// The plan advances `Idle -> RotatingFirst -> AwaitingSecond ->
/// RotatingSecond -> Done`, driven by [`AlignmentPlan::begin`],
/// [`AlignmentPlan::rotation_finished`] and
/// [`AlignmentPlan::begin_second`]. Gating the second phase on the
/// first rotation's completion signal (rather than a wall-clock
/// delay) keeps the sequence correct for any animation duration.
///
/// Both angles are computed once, at construction, from the original
/// landmark coordinates. In particular the second angle is **not**
/// recomputed from the points as rotated by the first phase.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use scan_landmark::{AlignmentPhase, AlignmentPlan};
///
/// let mut plan = AlignmentPlan::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 1.0),
/// );
///
/// let first = plan.begin().unwrap();
/// assert!((first.angle - 1.0_f64.atan2(-1.0)).abs() < 1e-12);
///
/// assert_eq!(plan.rotation_finished(), AlignmentPhase::AwaitingSecond);
/// let _second = plan.begin_second().unwrap();
/// assert_eq!(plan.rotation_finished(), AlignmentPhase::Done);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentPlan {
    landmarks: (Point3<f64>, Point3<f64>),
    first_angle: f64,
    second_angle: f64,
    phase: AlignmentPhase,
}

impl AlignmentPlan {
    /// Build a plan from the two landmark points.
    #[must_use]
    pub fn new(p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self {
            landmarks: (p1, p2),
            first_angle: first_phase_angle(&p1, &p2),
            // From the original coordinates, not the phase-1-rotated ones
            second_angle: second_phase_angle(&p1, &p2),
            phase: AlignmentPhase::Idle,
        }
    }

    /// The landmark points the plan was built from.
    #[must_use]
    pub const fn landmarks(&self) -> (Point3<f64>, Point3<f64>) {
        self.landmarks
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> AlignmentPhase {
        self.phase
    }

    /// The first rotation angle (about the lateral axis), in radians.
    #[must_use]
    pub const fn first_angle(&self) -> f64 {
        self.first_angle
    }

    /// The second rotation angle (about the depth axis), in radians.
    #[must_use]
    pub const fn second_angle(&self) -> f64 {
        self.second_angle
    }

    /// Whether both phases have completed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == AlignmentPhase::Done
    }

    /// Issue the first rotation.
    ///
    /// Returns `None` unless the plan is idle.
    pub fn begin(&mut self) -> Option<RotationRequest> {
        if self.phase != AlignmentPhase::Idle {
            return None;
        }
        self.phase = AlignmentPhase::RotatingFirst;
        debug!(angle = self.first_angle, "first alignment rotation issued");
        Some(RotationRequest {
            axis: RotationAxis::Lateral,
            angle: self.first_angle,
        })
    }

    /// Record that the in-flight rotation finished.
    ///
    /// Call this from the animator's completion callback. Returns the
    /// new phase; a call with no rotation in flight changes nothing.
    pub fn rotation_finished(&mut self) -> AlignmentPhase {
        self.phase = match self.phase {
            AlignmentPhase::RotatingFirst => AlignmentPhase::AwaitingSecond,
            AlignmentPhase::RotatingSecond => AlignmentPhase::Done,
            other => other,
        };
        self.phase
    }

    /// Issue the second rotation.
    ///
    /// Returns `None` unless the first rotation has finished and the
    /// second has not started.
    pub fn begin_second(&mut self) -> Option<RotationRequest> {
        if self.phase != AlignmentPhase::AwaitingSecond {
            return None;
        }
        self.phase = AlignmentPhase::RotatingSecond;
        debug!(angle = self.second_angle, "second alignment rotation issued");
        Some(RotationRequest {
            axis: RotationAxis::Depth,
            angle: self.second_angle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> AlignmentPlan {
        AlignmentPlan::new(Point3::new(0.5, 2.0, -1.0), Point3::new(-0.5, 1.0, 1.0))
    }

    #[test]
    fn phases_advance_in_order() {
        let mut plan = test_plan();
        assert_eq!(plan.phase(), AlignmentPhase::Idle);

        let first = plan.begin().unwrap();
        assert_eq!(first.axis, RotationAxis::Lateral);
        assert_eq!(plan.phase(), AlignmentPhase::RotatingFirst);

        assert_eq!(plan.rotation_finished(), AlignmentPhase::AwaitingSecond);

        let second = plan.begin_second().unwrap();
        assert_eq!(second.axis, RotationAxis::Depth);
        assert_eq!(plan.phase(), AlignmentPhase::RotatingSecond);

        assert_eq!(plan.rotation_finished(), AlignmentPhase::Done);
        assert!(plan.is_done());
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut plan = test_plan();
        assert!(plan.begin().is_some());
        assert!(plan.begin().is_none());
    }

    #[test]
    fn second_phase_requires_first_completion() {
        let mut plan = test_plan();
        assert!(plan.begin_second().is_none());

        plan.begin();
        assert!(plan.begin_second().is_none());

        plan.rotation_finished();
        assert!(plan.begin_second().is_some());
    }

    #[test]
    fn completion_without_rotation_in_flight_is_inert() {
        let mut plan = test_plan();
        assert_eq!(plan.rotation_finished(), AlignmentPhase::Idle);
        assert_eq!(plan.phase(), AlignmentPhase::Idle);
    }

    #[test]
    fn angles_are_frozen_at_construction() {
        let plan = test_plan();
        let (p1, p2) = plan.landmarks();
        assert!((plan.first_angle() - first_phase_angle(&p1, &p2)).abs() < 1e-15);
        assert!((plan.second_angle() - second_phase_angle(&p1, &p2)).abs() < 1e-15);
    }
}
