//! Constant-acceleration profile.

use super::Kinematics;

/// Uniform acceleration chosen so that `v0·T + ½·a·T² = distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConstantAccel {
    v0: f64,
    accel: f64,
}

impl ConstantAccel {
    pub(crate) fn new(duration: f64, distance: f64, v0: f64) -> Self {
        let accel = 2.0 * (distance - v0 * duration) / (duration * duration);
        Self { v0, accel }
    }

    pub(crate) fn accel(&self) -> f64 {
        self.accel
    }

    /// Velocity reached at the end of a segment of the given duration.
    pub(crate) fn final_velocity(&self, duration: f64) -> f64 {
        self.v0 + self.accel * duration
    }
}

impl Kinematics for ConstantAccel {
    fn position(&self, tau: f64) -> f64 {
        (self.v0 + 0.5 * self.accel * tau) * tau
    }

    fn velocity(&self, tau: f64) -> f64 {
        self.v0 + self.accel * tau
    }

    fn acceleration(&self, _tau: f64) -> f64 {
        self.accel
    }
}
