use thiserror::Error;

/// Errors raised while building a motion segment.
///
/// Evaluation never fails; every variant here comes out of parameter
/// validation or the coefficient fit performed at construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid time window: t0 ({t0}) must be less than t1 ({t1})")]
    InvalidTimeWindow { t0: f64, t1: f64 },

    #[error("Non-finite value for `{field}`: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("`{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Unknown profile shape: {0}")]
    UnknownShape(String),

    #[error("Final velocity is derived for the constant shape and must not be supplied")]
    DerivedVelocitySupplied,

    #[error("Cruise fraction must lie strictly within (0, 1), got {0}")]
    CruiseFraction(f64),

    #[error("Jerk-limited shape requires `{0}`")]
    MissingBoundary(&'static str),

    #[error("Singular linear system: zero pivot in column {column}")]
    Singular { column: usize },

    #[error("Dimension mismatch: {rows}x{cols} matrix with right-hand side of length {rhs}")]
    DimensionMismatch { rows: usize, cols: usize, rhs: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
