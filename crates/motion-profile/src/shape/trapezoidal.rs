//! Trapezoidal velocity profile: accelerate, cruise, decelerate.

use motion_core::Tolerance;
use serde::Serialize;

use super::{Kinematics, Triangular};
use crate::params::SegmentParams;

/// Phase layout of a trapezoidal profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapezoidPhases {
    pub accel_time: f64,
    pub cruise_time: f64,
    pub decel_time: f64,
    pub cruise_velocity: f64,
    /// The requested trapezoid was infeasible and the profile fell back to a
    /// rest-to-rest triangle; supplied boundary velocities are not honored.
    pub degenerate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Trapezoidal {
    phases: TrapezoidPhases,
    v0: f64,
    /// Signed acceleration during the first ramp.
    accel: f64,
    /// Signed acceleration during the last ramp.
    decel: f64,
    /// Distance covered by the end of the first ramp.
    accel_distance: f64,
    /// Distance covered by the end of the cruise.
    cruise_distance: f64,
}

impl Trapezoidal {
    pub(crate) fn new(params: &SegmentParams, tolerance: Tolerance) -> Self {
        let duration = params.duration();
        let (v0, vf) = (params.v0, params.final_velocity());

        if let Some(fraction) = params.cruise_fraction {
            return Self::with_cruise_fraction(duration, params.distance, v0, vf, fraction);
        }

        Self::minimum_cruise(duration, params.distance, v0, vf, tolerance).unwrap_or_else(|| {
            tracing::warn!(
                "Trapezoid infeasible for distance={} over {}s with v0={} vf={}; falling back to triangular profile",
                params.distance,
                duration,
                v0,
                vf
            );
            Self::triangular_fallback(duration, params.distance)
        })
    }

    /// Cruise for `fraction·T`, ramping for equal halves of the remainder.
    ///
    /// The cruise velocity solves
    /// `distance = ½·r·(v0 + v) + c·v + ½·r·(v + vf)` with ramp time `r`
    /// and cruise time `c`.
    fn with_cruise_fraction(duration: f64, distance: f64, v0: f64, vf: f64, fraction: f64) -> Self {
        let cruise_time = fraction * duration;
        let ramp = 0.5 * (duration - cruise_time);
        let cruise_velocity = (distance - 0.5 * ramp * (v0 + vf)) / (ramp + cruise_time);
        let phases = TrapezoidPhases {
            accel_time: ramp,
            cruise_time,
            decel_time: ramp,
            cruise_velocity,
            degenerate: false,
        };
        Self::from_phases(
            phases,
            v0,
            (cruise_velocity - v0) / ramp,
            (vf - cruise_velocity) / ramp,
        )
    }

    /// Lowest cruise velocity reachable with ramps at the acceleration
    /// magnitude of the equivalent triangular profile (`4·distance/T²`).
    ///
    /// Each ramp heads from its boundary velocity toward the cruise velocity
    /// `v`, accelerating or decelerating as needed. With `s0 = sign(v - v0)` and
    /// `sf = sign(v - vf)` the covered distance is
    /// `v·T - s0·(v - v0)²/(2a) - sf·(v - vf)²/(2a)`. Every sign combination is
    /// solved and a root is kept when it lies on its assumed side of `v0` and
    /// `vf` and leaves a non-negative cruise. Returns `None` when no root
    /// survives.
    fn minimum_cruise(
        duration: f64,
        distance: f64,
        v0: f64,
        vf: f64,
        tolerance: Tolerance,
    ) -> Option<Self> {
        let accel = 4.0 * distance / (duration * duration);
        if accel <= 0.0 {
            return None;
        }

        let vel_tol = Tolerance::new(
            tolerance.absolute * (accel * duration).max(v0).max(vf).max(1.0),
        );
        let time_tol = Tolerance::new(tolerance.absolute * duration.max(1.0));

        let mut best: Option<(f64, f64)> = None;
        for (above_v0, above_vf) in [(true, true), (true, false), (false, true), (false, false)] {
            let s0 = if above_v0 { 1.0 } else { -1.0 };
            let sf = if above_vf { 1.0 } else { -1.0 };
            // 2a·(distance equation), collected as A·v² + B·v + C = 0.
            let roots = quadratic_roots(
                -(s0 + sf),
                2.0 * (accel * duration + s0 * v0 + sf * vf),
                -(s0 * v0 * v0 + sf * vf * vf + 2.0 * accel * distance),
                tolerance,
            );
            for v in roots.into_iter().flatten() {
                if !on_side(v, v0, above_v0, vel_tol) || !on_side(v, vf, above_vf, vel_tol) {
                    continue;
                }
                let ramps = ((v - v0).abs() + (v - vf).abs()) / accel;
                let Some(cruise_time) = time_tol.non_negative(duration - ramps) else {
                    continue;
                };
                if best.map_or(true, |(lowest, _)| v < lowest) {
                    best = Some((v, cruise_time));
                }
            }
        }

        let (cruise_velocity, cruise_time) = best?;
        let phases = TrapezoidPhases {
            accel_time: (cruise_velocity - v0).abs() / accel,
            cruise_time,
            decel_time: (cruise_velocity - vf).abs() / accel,
            cruise_velocity,
            degenerate: false,
        };
        let first = if cruise_velocity >= v0 { accel } else { -accel };
        let last = if vf >= cruise_velocity { accel } else { -accel };
        Some(Self::from_phases(phases, v0, first, last))
    }

    fn triangular_fallback(duration: f64, distance: f64) -> Self {
        let tri = Triangular::new(duration, distance);
        let half = 0.5 * duration;
        let phases = TrapezoidPhases {
            accel_time: half,
            cruise_time: 0.0,
            decel_time: half,
            cruise_velocity: tri.peak_velocity(),
            degenerate: true,
        };
        Self::from_phases(phases, 0.0, tri.accel(), -tri.accel())
    }

    fn from_phases(phases: TrapezoidPhases, v0: f64, accel: f64, decel: f64) -> Self {
        let accel_distance = (v0 + 0.5 * accel * phases.accel_time) * phases.accel_time;
        let cruise_distance = accel_distance + phases.cruise_velocity * phases.cruise_time;
        Self {
            phases,
            v0,
            accel,
            decel,
            accel_distance,
            cruise_distance,
        }
    }

    pub(crate) fn phases(&self) -> TrapezoidPhases {
        self.phases
    }

    /// Local time at which the deceleration ramp starts.
    fn decel_start(&self) -> f64 {
        self.phases.accel_time + self.phases.cruise_time
    }
}

/// Whether `v` lies above (or below) `boundary`, treating values within
/// tolerance as either side.
fn on_side(v: f64, boundary: f64, above: bool, tolerance: Tolerance) -> bool {
    tolerance.approx_eq(v, boundary) || (v > boundary) == above
}

/// Real roots of `a·x² + b·x + c`, falling back to the linear root when `a` is zero.
fn quadratic_roots(a: f64, b: f64, c: f64, tolerance: Tolerance) -> [Option<f64>; 2] {
    if a == 0.0 {
        return if b == 0.0 { [None, None] } else { [Some(-c / b), None] };
    }
    let disc_tol = Tolerance::new(tolerance.absolute * (b * b).max(1.0));
    match disc_tol.non_negative(b * b - 4.0 * a * c) {
        Some(disc) => {
            let root = disc.sqrt();
            [Some((-b - root) / (2.0 * a)), Some((-b + root) / (2.0 * a))]
        }
        None => [None, None],
    }
}

impl Kinematics for Trapezoidal {
    fn position(&self, tau: f64) -> f64 {
        let p = &self.phases;
        if tau < p.accel_time {
            return (self.v0 + 0.5 * self.accel * tau) * tau;
        }
        if tau < self.decel_start() {
            return self.accel_distance + p.cruise_velocity * (tau - p.accel_time);
        }
        let u = tau - self.decel_start();
        self.cruise_distance + (p.cruise_velocity + 0.5 * self.decel * u) * u
    }

    fn velocity(&self, tau: f64) -> f64 {
        let p = &self.phases;
        if tau < p.accel_time {
            self.v0 + self.accel * tau
        } else if tau < self.decel_start() {
            p.cruise_velocity
        } else {
            p.cruise_velocity + self.decel * (tau - self.decel_start())
        }
    }

    fn acceleration(&self, tau: f64) -> f64 {
        if tau < self.phases.accel_time {
            self.accel
        } else if tau < self.decel_start() {
            0.0
        } else {
            self.decel
        }
    }
}
