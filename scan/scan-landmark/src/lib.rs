//! Landmark-based alignment solve for ScanAlign.
//!
//! Turns two user-picked faces into a pair of rotation angles that
//! bring the scanned assembly into its canonical orientation:
//!
//! 1. [`selection_plane`] - build a reference plane from a pick,
//!    anchored at the mid-shell point found by a probe ray
//! 2. [`derive_landmarks`] - cut one surface with its plane and cross
//!    the contour with the other plane, with a symmetric mesh-swap
//!    fallback
//! 3. [`first_phase_angle`] / [`second_phase_angle`] - the two
//!    sequential single-axis rotation angles
//! 4. [`AlignmentPlan`] - a state machine sequencing the two rotation
//!    phases on real completion events
//!
//! [`solve_alignment`] runs the whole chain.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod landmarks;
mod pick;
mod plan;
mod probe;
mod solve;

pub use error::{AlignError, AlignResult};
pub use landmarks::derive_landmarks;
pub use pick::FacePick;
pub use plan::{AlignmentPhase, AlignmentPlan, RotationRequest};
pub use probe::{selection_plane, ProbeParams};
pub use solve::{
    first_phase_angle, second_phase_angle, solve_alignment, AlignmentSolution, SolveParams,
};
