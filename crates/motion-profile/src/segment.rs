//! A single bounded motion interval.

use motion_core::{Result, Tolerance, Validate};

use crate::params::{SegmentParams, Shape};
use crate::profile::MotionProfile;
use crate::sample::{self, ProfileSample};
use crate::shape::{Kinematics, ProfileKind, TrapezoidPhases};

/// A validated motion segment with its shape parameters derived once.
///
/// Construction either returns a fully derived segment or an error; there is no
/// partially built state. Evaluation is pure and never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    params: SegmentParams,
    kind: ProfileKind,
}

impl Segment {
    /// Validate `params` and derive the shape parameters using the default tolerance.
    pub fn new(params: SegmentParams) -> Result<Self> {
        Self::with_tolerance(params, Tolerance::default())
    }

    /// Like [`Segment::new`], with an explicit tolerance for feasibility decisions.
    pub fn with_tolerance(params: SegmentParams, tolerance: Tolerance) -> Result<Self> {
        params.validate()?;
        let kind = ProfileKind::build(&params, tolerance)?;
        tracing::debug!(
            "Built {} segment over [{}, {}] covering {}",
            params.shape,
            params.t0,
            params.t1,
            params.distance
        );
        Ok(Self { params, kind })
    }

    /// Parse parameters from JSON and build the segment.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(SegmentParams::from_json(json)?)
    }

    pub fn params(&self) -> &SegmentParams {
        &self.params
    }

    pub fn shape(&self) -> Shape {
        self.params.shape
    }

    pub fn start_time(&self) -> f64 {
        self.params.t0
    }

    pub fn end_time(&self) -> f64 {
        self.params.t1
    }

    pub fn duration(&self) -> f64 {
        self.params.duration()
    }

    pub fn distance(&self) -> f64 {
        self.params.distance
    }

    pub fn initial_velocity(&self) -> f64 {
        self.params.v0
    }

    /// Velocity the segment is built to end at.
    ///
    /// Derived for the constant shape, otherwise the supplied `vf` or `v0`.
    pub fn final_velocity(&self) -> f64 {
        match &self.kind {
            ProfileKind::Constant(c) => c.final_velocity(self.duration()),
            _ => self.params.final_velocity(),
        }
    }

    /// Boundary accelerations `(a0, af)`; derived for the constant shape.
    pub fn boundary_accelerations(&self) -> (f64, f64) {
        match &self.kind {
            ProfileKind::Constant(c) => (c.accel(), c.accel()),
            _ => (
                self.params.a0.unwrap_or(0.0),
                self.params.af.unwrap_or(0.0),
            ),
        }
    }

    /// Power-basis coefficients in `t - t0`, lowest degree first.
    ///
    /// Only the polynomial and jerk-limited shapes carry coefficients.
    pub fn coefficients(&self) -> Option<&[f64]> {
        match &self.kind {
            ProfileKind::Polynomial(fit) | ProfileKind::JerkLimited(fit) => {
                Some(fit.coefficients())
            }
            _ => None,
        }
    }

    /// Phase layout of a trapezoidal segment.
    pub fn trapezoid_phases(&self) -> Option<TrapezoidPhases> {
        match &self.kind {
            ProfileKind::Trapezoidal(trap) => Some(trap.phases()),
            _ => None,
        }
    }

    /// Evaluate on `count` equally spaced times across the segment, endpoints included.
    pub fn sample(&self, count: usize) -> Vec<ProfileSample> {
        sample::sample_profile(self, count)
    }

    /// Evaluate at the given times, clamping each into the segment.
    pub fn sample_at(&self, times: &[f64]) -> Vec<ProfileSample> {
        sample::sample_at(self, times)
    }

    /// Same grid as [`Segment::sample`], evaluated across the rayon thread pool.
    pub fn sample_par(&self, count: usize) -> Vec<ProfileSample> {
        sample::sample_profile_par(self, count)
    }

    fn local_time(&self, t: f64) -> f64 {
        t.clamp(self.params.t0, self.params.t1) - self.params.t0
    }
}

impl MotionProfile for Segment {
    fn position(&self, t: f64) -> f64 {
        self.kind.position(self.local_time(t))
    }

    fn velocity(&self, t: f64) -> f64 {
        self.kind.velocity(self.local_time(t))
    }

    fn acceleration(&self, t: f64) -> f64 {
        self.kind.acceleration(self.local_time(t))
    }

    fn jerk(&self, t: f64) -> f64 {
        self.kind.jerk(self.local_time(t))
    }

    fn domain(&self) -> (f64, f64) {
        (self.params.t0, self.params.t1)
    }
}
