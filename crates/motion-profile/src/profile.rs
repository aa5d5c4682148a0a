//! The evaluation surface shared by motion profiles.

use crate::sample::{scan_max_abs, EXTREMA_SAMPLES};

/// A one-dimensional motion profile over a bounded time window.
///
/// Times outside [`domain`](MotionProfile::domain) are clamped to the nearest
/// endpoint; profiles never extrapolate.
pub trait MotionProfile: Send + Sync {
    /// Displacement from the start of the window at time `t`.
    fn position(&self, t: f64) -> f64;

    fn velocity(&self, t: f64) -> f64;

    fn acceleration(&self, t: f64) -> f64;

    fn jerk(&self, t: f64) -> f64;

    /// Return the time window `(t0, t1)`.
    fn domain(&self) -> (f64, f64);

    /// Largest `|velocity|` over an equally spaced scan of the domain.
    fn max_velocity(&self) -> f64 {
        scan_max_abs(self, EXTREMA_SAMPLES, |p, t| p.velocity(t))
    }

    /// Largest `|acceleration|` over an equally spaced scan of the domain.
    ///
    /// Extrema falling between scan points are not found.
    fn max_acceleration(&self) -> f64 {
        scan_max_abs(self, EXTREMA_SAMPLES, |p, t| p.acceleration(t))
    }

    /// Largest `|jerk|` over an equally spaced scan of the domain.
    fn max_jerk(&self) -> f64 {
        scan_max_abs(self, EXTREMA_SAMPLES, |p, t| p.jerk(t))
    }
}
