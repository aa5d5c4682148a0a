/// Absolute tolerance used for feasibility decisions and approximate
/// comparisons on profile quantities (times, velocities, distances).
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance in model units
    pub absolute: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;

    pub fn new(absolute: f64) -> Self {
        Self {
            absolute: absolute.abs(),
        }
    }

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
        }
    }

    /// Check if two values are equal within tolerance
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.absolute
    }

    /// Check if a value is zero within tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.absolute
    }

    /// Snap values within tolerance of zero to exactly zero.
    ///
    /// Returns `None` when `v` is negative beyond the tolerance.
    pub fn non_negative(self, v: f64) -> Option<f64> {
        if v >= 0.0 {
            Some(v)
        } else if self.is_zero(v) {
            Some(0.0)
        } else {
            None
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
