pub mod linsolve;
pub mod polynomial;

pub use linsolve::solve;
pub use polynomial::{boundary_row, falling_factorial, Polynomial};
