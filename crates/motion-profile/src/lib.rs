//! Analytic single-segment motion profiles.
//!
//! A [`Segment`] is built once from [`SegmentParams`] and then evaluated at
//! arbitrary times through the [`MotionProfile`] trait.

pub mod params;
pub mod profile;
pub mod sample;
pub mod segment;
mod shape;

pub use motion_core::{ProfileError, Result, Tolerance};
pub use params::{SegmentParams, Shape};
pub use profile::MotionProfile;
pub use sample::ProfileSample;
pub use segment::Segment;
pub use shape::TrapezoidPhases;
