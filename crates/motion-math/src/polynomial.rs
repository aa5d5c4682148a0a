//! Power-basis polynomials in local time.

use serde::{Deserialize, Serialize};

/// A polynomial `p(x) = Σ cᵢ·xⁱ` with coefficients stored from lowest to highest degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Degree of the polynomial, counting trailing zero coefficients.
    ///
    /// The empty polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate at `x` using Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// The `order`-th derivative.
    ///
    /// Coefficient `cᵢ` moves to position `i - order` and is weighted by the
    /// falling factorial `i·(i-1)···(i-order+1)`. Differentiating past the
    /// degree yields the zero polynomial.
    pub fn derivative(&self, order: usize) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(order)
            .map(|(i, &c)| c * falling_factorial(i, order))
            .collect();
        Polynomial { coefficients }
    }
}

/// `n·(n-1)···(n-k+1)`, with `falling_factorial(n, 0) == 1`.
pub fn falling_factorial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    ((n - k + 1)..=n).fold(1.0, |acc, m| acc * m as f64)
}

/// Row of the boundary-condition matrix for a degree-`degree` polynomial.
///
/// Entry `i` is the coefficient of `cᵢ` in the `order`-th derivative evaluated
/// at `x`: `i!/(i-order)! · x^(i-order)` for `i >= order`, zero otherwise.
pub fn boundary_row(order: usize, degree: usize, x: f64) -> Vec<f64> {
    (0..=degree)
        .map(|i| {
            if i < order {
                0.0
            } else {
                falling_factorial(i, order) * x.powi((i - order) as i32)
            }
        })
        .collect()
}
