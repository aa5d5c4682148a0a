//! Symmetric triangular velocity profile.

use super::Kinematics;

/// Accelerate from rest to `peak_velocity` over the first half, decelerate back
/// to rest over the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Triangular {
    half: f64,
    peak_velocity: f64,
    accel: f64,
}

impl Triangular {
    pub(crate) fn new(duration: f64, distance: f64) -> Self {
        let half = 0.5 * duration;
        let peak_velocity = 2.0 * distance / duration;
        Self {
            half,
            peak_velocity,
            accel: peak_velocity / half,
        }
    }

    pub(crate) fn peak_velocity(&self) -> f64 {
        self.peak_velocity
    }

    pub(crate) fn accel(&self) -> f64 {
        self.accel
    }
}

impl Kinematics for Triangular {
    fn position(&self, tau: f64) -> f64 {
        if tau < self.half {
            return 0.5 * self.accel * tau * tau;
        }
        let u = tau - self.half;
        0.5 * self.accel * self.half * self.half + (self.peak_velocity - 0.5 * self.accel * u) * u
    }

    fn velocity(&self, tau: f64) -> f64 {
        if tau < self.half {
            self.accel * tau
        } else {
            self.peak_velocity - self.accel * (tau - self.half)
        }
    }

    fn acceleration(&self, tau: f64) -> f64 {
        if tau < self.half {
            self.accel
        } else {
            -self.accel
        }
    }
}
