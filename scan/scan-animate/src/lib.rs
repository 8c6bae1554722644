//! Frame-driven rotation animation for ScanAlign.
//!
//! [`RotationAnimation`] interpolates one rotation axis of an object
//! from its current angle to a target angle over a fixed duration,
//! with an ease-in/ease-out curve. It is advanced by the host render
//! loop's clock and never blocks; the completion callback fires
//! exactly once, after interpolation finishes.
//!
//! There is no cancellation: starting a second animation on the same
//! axis of the same object while one is in flight is undefined
//! behavior and up to the caller to avoid.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

use scan_types::RotationAxis;

/// Animation timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Duration of one rotation animation, in seconds.
    pub duration: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self { duration: 1.0 }
    }
}

impl AnimationParams {
    /// Create parameters with the default one-second duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation duration in seconds.
    #[must_use]
    pub const fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

type CompletionCallback = Box<dyn FnOnce()>;

/// An in-flight single-axis rotation.
///
/// Call [`RotationAnimation::advance`] once per rendered frame with
/// the frame's delta time and apply the returned angle to the target
/// object's rotation on [`RotationAnimation::axis`].
///
/// # Example
///
/// ```
/// use scan_animate::{AnimationParams, RotationAnimation};
/// use scan_types::RotationAxis;
///
/// let mut anim = RotationAnimation::new(
///     RotationAxis::Lateral,
///     0.0,
///     1.0,
///     &AnimationParams::default(),
/// );
///
/// let mid = anim.advance(0.5);
/// assert!(mid > 0.0 && mid < 1.0);
///
/// let end = anim.advance(0.5);
/// assert!((end - 1.0).abs() < 1e-12);
/// assert!(anim.is_finished());
/// ```
pub struct RotationAnimation {
    axis: RotationAxis,
    start: f64,
    target: f64,
    duration: f64,
    elapsed: f64,
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for RotationAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationAnimation")
            .field("axis", &self.axis)
            .field("start", &self.start)
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl RotationAnimation {
    /// Start an animation from the object's current angle to a target
    /// angle.
    #[must_use]
    pub fn new(axis: RotationAxis, start: f64, target: f64, params: &AnimationParams) -> Self {
        Self {
            axis,
            start,
            target,
            duration: params.duration.max(0.0),
            elapsed: 0.0,
            on_complete: None,
        }
    }

    /// Attach a callback invoked exactly once when the animation
    /// finishes.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// The axis this animation rotates about.
    #[must_use]
    pub const fn axis(&self) -> RotationAxis {
        self.axis
    }

    /// The target angle, in radians.
    #[must_use]
    pub const fn target_angle(&self) -> f64 {
        self.target
    }

    /// Interpolation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Whether interpolation has reached the target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by the host clock's frame delta and return the angle to
    /// apply this frame.
    ///
    /// Once the duration elapses the angle clamps to the target and
    /// the completion callback (if any) fires; it will not fire again.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);

        if self.is_finished() {
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
            return self.target;
        }

        let eased = ease_in_out(self.progress());
        (self.target - self.start).mul_add(eased, self.start)
    }
}

/// Quadratic ease-in/ease-out over `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
