//! Sampling utilities for converting profiles to discrete representations.

use rayon::prelude::*;
use serde::Serialize;

use crate::profile::MotionProfile;

/// Number of scan points used by the extrema queries.
pub const EXTREMA_SAMPLES: usize = 100;

/// Kinematic state of a profile at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSample {
    pub t: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub jerk: f64,
}

impl ProfileSample {
    pub fn at<P: MotionProfile + ?Sized>(profile: &P, t: f64) -> Self {
        Self {
            t,
            position: profile.position(t),
            velocity: profile.velocity(t),
            acceleration: profile.acceleration(t),
            jerk: profile.jerk(t),
        }
    }
}

/// `count` equally spaced times covering `[t0, t1]`, both endpoints included.
///
/// Fewer than two points are widened to the two endpoints.
pub fn time_grid(t0: f64, t1: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let step = (t1 - t0) / (count - 1) as f64;
    let mut times: Vec<f64> = (0..count).map(|i| t0 + step * i as f64).collect();
    // Pin the last point so rounding in `step` never lands short of t1.
    times[count - 1] = t1;
    times
}

/// Maximum of `|f(profile, t)|` over `samples` equally spaced times.
pub fn scan_max_abs<P, F>(profile: &P, samples: usize, f: F) -> f64
where
    P: MotionProfile + ?Sized,
    F: Fn(&P, f64) -> f64,
{
    let (t0, t1) = profile.domain();
    time_grid(t0, t1, samples)
        .into_iter()
        .map(|t| f(profile, t).abs())
        .fold(0.0, f64::max)
}

/// Evaluate the profile on a uniform grid of `count` points.
pub fn sample_profile<P: MotionProfile + ?Sized>(profile: &P, count: usize) -> Vec<ProfileSample> {
    let (t0, t1) = profile.domain();
    sample_at(profile, &time_grid(t0, t1, count))
}

/// Evaluate the profile at caller-supplied times.
pub fn sample_at<P: MotionProfile + ?Sized>(profile: &P, times: &[f64]) -> Vec<ProfileSample> {
    times.iter().map(|&t| ProfileSample::at(profile, t)).collect()
}

/// Parallel counterpart of [`sample_profile`].
pub fn sample_profile_par<P: MotionProfile + ?Sized>(
    profile: &P,
    count: usize,
) -> Vec<ProfileSample> {
    let (t0, t1) = profile.domain();
    time_grid(t0, t1, count)
        .into_par_iter()
        .map(|t| ProfileSample::at(profile, t))
        .collect()
}
