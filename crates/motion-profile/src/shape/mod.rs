//! Per-shape parameter derivation and closed-form kinematics.
//!
//! Every shape is evaluated in local time `tau = t - t0`, already clamped to
//! `[0, T]` by the owning [`Segment`](crate::Segment).

mod constant;
mod polyfit;
mod scurve;
mod trapezoidal;
mod triangular;

use motion_core::{Result, Tolerance};

use crate::params::{SegmentParams, Shape};

pub(crate) use constant::ConstantAccel;
pub(crate) use polyfit::PolynomialFit;
pub(crate) use scurve::CubicSCurve;
pub(crate) use trapezoidal::Trapezoidal;
pub use trapezoidal::TrapezoidPhases;
pub(crate) use triangular::Triangular;

/// Position and its first three derivatives in local time.
pub(crate) trait Kinematics {
    fn position(&self, tau: f64) -> f64;

    fn velocity(&self, tau: f64) -> f64;

    fn acceleration(&self, tau: f64) -> f64;

    /// Piecewise-constant acceleration profiles do not model the impulses at
    /// their phase boundaries.
    fn jerk(&self, _tau: f64) -> f64 {
        0.0
    }
}

/// Derived state for one of the six shapes, computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ProfileKind {
    Constant(ConstantAccel),
    Triangular(Triangular),
    Trapezoidal(Trapezoidal),
    SCurve(CubicSCurve),
    Polynomial(PolynomialFit),
    JerkLimited(PolynomialFit),
}

impl ProfileKind {
    /// Derive shape parameters from already validated inputs.
    pub(crate) fn build(params: &SegmentParams, tolerance: Tolerance) -> Result<Self> {
        let duration = params.duration();
        let kind = match params.shape {
            Shape::Constant => {
                ProfileKind::Constant(ConstantAccel::new(duration, params.distance, params.v0))
            }
            Shape::Triangular => {
                warn_ignored_velocities(params);
                ProfileKind::Triangular(Triangular::new(duration, params.distance))
            }
            Shape::Trapezoidal => ProfileKind::Trapezoidal(Trapezoidal::new(params, tolerance)),
            Shape::SCurve => {
                warn_ignored_velocities(params);
                ProfileKind::SCurve(CubicSCurve::new(duration, params.distance))
            }
            Shape::Polynomial => {
                // Quintic only when both boundary accelerations are pinned.
                let orders = if params.a0.is_some() && params.af.is_some() {
                    3
                } else {
                    2
                };
                ProfileKind::Polynomial(PolynomialFit::fit(params, orders)?)
            }
            Shape::JerkLimited => ProfileKind::JerkLimited(PolynomialFit::fit(params, 4)?),
        };
        Ok(kind)
    }

    fn kinematics(&self) -> &dyn Kinematics {
        match self {
            ProfileKind::Constant(k) => k,
            ProfileKind::Triangular(k) => k,
            ProfileKind::Trapezoidal(k) => k,
            ProfileKind::SCurve(k) => k,
            ProfileKind::Polynomial(k) | ProfileKind::JerkLimited(k) => k,
        }
    }
}

impl Kinematics for ProfileKind {
    fn position(&self, tau: f64) -> f64 {
        self.kinematics().position(tau)
    }

    fn velocity(&self, tau: f64) -> f64 {
        self.kinematics().velocity(tau)
    }

    fn acceleration(&self, tau: f64) -> f64 {
        self.kinematics().acceleration(tau)
    }

    fn jerk(&self, tau: f64) -> f64 {
        self.kinematics().jerk(tau)
    }
}

fn warn_ignored_velocities(params: &SegmentParams) {
    let vf = params.final_velocity();
    if params.v0 != 0.0 || vf != 0.0 {
        tracing::warn!(
            "{} profile assumes rest-to-rest motion; ignoring v0={} vf={}",
            params.shape,
            params.v0,
            vf
        );
    }
}
