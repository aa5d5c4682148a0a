//! Construction parameters and their validation.

use std::fmt;
use std::str::FromStr;

use motion_core::{ProfileError, Result, Validate};
use serde::{Deserialize, Serialize};

/// The functional family used to interpolate between boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shape {
    /// Constant acceleration over the whole interval.
    Constant,
    /// Symmetric accelerate/decelerate about the midpoint.
    Triangular,
    /// Accelerate, cruise, decelerate.
    Trapezoidal,
    /// Cubic Hermite blend `3x² - 2x³`.
    SCurve,
    /// Cubic or quintic fit of the boundary conditions.
    Polynomial,
    /// Degree-7 fit through position, velocity, acceleration and jerk.
    JerkLimited,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Constant,
        Shape::Triangular,
        Shape::Trapezoidal,
        Shape::SCurve,
        Shape::Polynomial,
        Shape::JerkLimited,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Constant => "constant",
            Shape::Triangular => "triangular",
            Shape::Trapezoidal => "trapezoidal",
            Shape::SCurve => "s_curve",
            Shape::Polynomial => "polynomial",
            Shape::JerkLimited => "jerk_limited",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" => Ok(Shape::Constant),
            "triangular" => Ok(Shape::Triangular),
            "trapezoidal" => Ok(Shape::Trapezoidal),
            "s_curve" | "scurve" | "s-curve" => Ok(Shape::SCurve),
            "polynomial" => Ok(Shape::Polynomial),
            "jerk_limited" | "jerk-limited" => Ok(Shape::JerkLimited),
            _ => Err(ProfileError::UnknownShape(s.to_string())),
        }
    }
}

impl TryFrom<String> for Shape {
    type Error = ProfileError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Shape> for String {
    fn from(shape: Shape) -> Self {
        shape.as_str().to_string()
    }
}

/// Every input a segment can be built from.
///
/// Optional fields default per shape:
/// * `vf` falls back to `v0`; the constant shape derives it and rejects a supplied value.
/// * `a0`, `af`, `j0`, `jf` fall back to 0, except for the jerk-limited shape which
///   requires all four. Supplying both `a0` and `af` upgrades the polynomial shape
///   from a cubic to a quintic fit.
/// * `cruise_fraction` only applies to the trapezoidal shape; when absent the
///   minimum feasible cruise is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentParams {
    pub shape: Shape,
    pub t0: f64,
    pub t1: f64,
    pub distance: f64,
    #[serde(default)]
    pub v0: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub af: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cruise_fraction: Option<f64>,
}

impl SegmentParams {
    pub fn new(shape: Shape, t0: f64, t1: f64, distance: f64) -> Self {
        Self {
            shape,
            t0,
            t1,
            distance,
            v0: 0.0,
            vf: None,
            a0: None,
            af: None,
            j0: None,
            jf: None,
            cruise_fraction: None,
        }
    }

    /// Parse parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    pub fn with_initial_velocity(mut self, v0: f64) -> Self {
        self.v0 = v0;
        self
    }

    pub fn with_final_velocity(mut self, vf: f64) -> Self {
        self.vf = Some(vf);
        self
    }

    pub fn with_accelerations(mut self, a0: f64, af: f64) -> Self {
        self.a0 = Some(a0);
        self.af = Some(af);
        self
    }

    pub fn with_jerks(mut self, j0: f64, jf: f64) -> Self {
        self.j0 = Some(j0);
        self.jf = Some(jf);
        self
    }

    pub fn with_cruise_fraction(mut self, fraction: f64) -> Self {
        self.cruise_fraction = Some(fraction);
        self
    }

    pub fn duration(&self) -> f64 {
        self.t1 - self.t0
    }

    /// Final velocity after defaulting (`v0` when not supplied).
    pub fn final_velocity(&self) -> f64 {
        self.vf.unwrap_or(self.v0)
    }

    /// Boundary values at the start, ordered position, velocity, acceleration, jerk.
    pub(crate) fn start_conditions(&self) -> [f64; 4] {
        [
            0.0,
            self.v0,
            self.a0.unwrap_or(0.0),
            self.j0.unwrap_or(0.0),
        ]
    }

    /// Boundary values at the end, ordered position, velocity, acceleration, jerk.
    pub(crate) fn end_conditions(&self) -> [f64; 4] {
        [
            self.distance,
            self.final_velocity(),
            self.af.unwrap_or(0.0),
            self.jf.unwrap_or(0.0),
        ]
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProfileError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if finite(field, value)? < 0.0 {
        return Err(ProfileError::Negative { field, value });
    }
    Ok(())
}

impl Validate for SegmentParams {
    fn validate(&self) -> Result<()> {
        let t0 = finite("t0", self.t0)?;
        let t1 = finite("t1", self.t1)?;
        if t0 >= t1 {
            return Err(ProfileError::InvalidTimeWindow { t0, t1 });
        }
        non_negative("distance", self.distance)?;
        non_negative("v0", self.v0)?;

        let optional = [
            ("vf", self.vf),
            ("a0", self.a0),
            ("af", self.af),
            ("j0", self.j0),
            ("jf", self.jf),
            ("cruise_fraction", self.cruise_fraction),
        ];
        for (field, value) in optional {
            if let Some(v) = value {
                finite(field, v)?;
            }
        }

        match (self.shape, self.vf) {
            (Shape::Constant, Some(_)) => return Err(ProfileError::DerivedVelocitySupplied),
            (_, Some(vf)) => non_negative("vf", vf)?,
            (_, None) => {}
        }

        if self.shape == Shape::JerkLimited {
            let required = [
                ("a0", self.a0),
                ("af", self.af),
                ("j0", self.j0),
                ("jf", self.jf),
            ];
            if let Some((field, _)) = required.iter().find(|(_, v)| v.is_none()) {
                return Err(ProfileError::MissingBoundary(*field));
            }
        }

        if self.shape == Shape::Trapezoidal {
            if let Some(f) = self.cruise_fraction {
                if f <= 0.0 || f >= 1.0 {
                    return Err(ProfileError::CruiseFraction(f));
                }
            }
        }

        Ok(())
    }
}
