//! Power-basis polynomial fitted to boundary conditions.

use motion_core::Result;
use motion_math::{boundary_row, linsolve, Polynomial};

use super::Kinematics;
use crate::params::SegmentParams;

/// Position polynomial together with its first three derivatives.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PolynomialFit {
    position: Polynomial,
    velocity: Polynomial,
    acceleration: Polynomial,
    jerk: Polynomial,
}

impl PolynomialFit {
    /// Fit a polynomial of degree `2·orders - 1` matching position and the first
    /// `orders - 1` derivatives at both ends of the segment.
    ///
    /// `orders` is 2 (cubic), 3 (quintic) or 4 (degree 7).
    pub(crate) fn fit(params: &SegmentParams, orders: usize) -> Result<Self> {
        debug_assert!((1..=4).contains(&orders), "unsupported fit order {orders}");
        let duration = params.duration();
        let degree = 2 * orders - 1;
        let start = params.start_conditions();
        let end = params.end_conditions();

        let mut matrix = Vec::with_capacity(2 * orders);
        let mut rhs = Vec::with_capacity(2 * orders);
        for order in 0..orders {
            matrix.push(boundary_row(order, degree, 0.0));
            rhs.push(start[order]);
            matrix.push(boundary_row(order, degree, duration));
            rhs.push(end[order]);
        }

        let position = Polynomial::new(linsolve::solve(&matrix, &rhs)?);
        tracing::debug!(
            "Fitted degree-{} polynomial for {} segment: {:?}",
            position.degree(),
            params.shape,
            position.coefficients
        );

        Ok(Self::from_position(position))
    }

    fn from_position(position: Polynomial) -> Self {
        Self {
            velocity: position.derivative(1),
            acceleration: position.derivative(2),
            jerk: position.derivative(3),
            position,
        }
    }

    pub(crate) fn coefficients(&self) -> &[f64] {
        &self.position.coefficients
    }
}

impl Kinematics for PolynomialFit {
    fn position(&self, tau: f64) -> f64 {
        self.position.eval(tau)
    }

    fn velocity(&self, tau: f64) -> f64 {
        self.velocity.eval(tau)
    }

    fn acceleration(&self, tau: f64) -> f64 {
        self.acceleration.eval(tau)
    }

    fn jerk(&self, tau: f64) -> f64 {
        self.jerk.eval(tau)
    }
}
