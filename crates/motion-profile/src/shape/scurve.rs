//! Cubic S-curve: the Hermite blend `3x² - 2x³` over normalized time.

use super::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CubicSCurve {
    duration: f64,
    distance: f64,
}

impl CubicSCurve {
    pub(crate) fn new(duration: f64, distance: f64) -> Self {
        Self { duration, distance }
    }

    fn normalized(&self, tau: f64) -> f64 {
        (tau / self.duration).clamp(0.0, 1.0)
    }
}

impl Kinematics for CubicSCurve {
    fn position(&self, tau: f64) -> f64 {
        let x = self.normalized(tau);
        self.distance * x * x * (3.0 - 2.0 * x)
    }

    fn velocity(&self, tau: f64) -> f64 {
        let x = self.normalized(tau);
        6.0 * self.distance * x * (1.0 - x) / self.duration
    }

    fn acceleration(&self, tau: f64) -> f64 {
        let x = self.normalized(tau);
        self.distance * (6.0 - 12.0 * x) / (self.duration * self.duration)
    }

    fn jerk(&self, _tau: f64) -> f64 {
        -12.0 * self.distance / self.duration.powi(3)
    }
}
