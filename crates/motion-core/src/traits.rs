use crate::error::Result;

/// Validate the constraints of a parameter record before anything is derived from it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
