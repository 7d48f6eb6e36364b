// used to print out readable forms of a membership shape
use std::fmt;

use crate::error::{FuzzyAqiError, Result};

/// One-dimensional membership shapes.
///
/// Control points are kept exactly as given; [`MembershipFunction::validate`]
/// rejects out-of-order or non-finite points, and every constructor and
/// every [`crate::variable::LinguisticVariable`] term goes through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Rises from 0 at `a` to 1 at `b`, falls back to 0 at `c`.
    Triangular(f64, f64, f64),
    /// Rises from 0 at `a` to 1 at `b`, holds 1 until `c`, falls to 0 at `d`.
    Trapezoidal(f64, f64, f64, f64),
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        let mf = Self::Triangular(a, b, c);
        mf.validate()?;
        Ok(mf)
    }
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        let mf = Self::Trapezoidal(a, b, c, d);
        mf.validate()?;
        Ok(mf)
    }

    /// Checks that the control points are finite and non-decreasing.
    pub fn validate(&self) -> Result<()> {
        let points = self.points();
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyAqiError::Configuration(format!(
                "{self} has a non-finite control point"
            )));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(FuzzyAqiError::Configuration(format!(
                "{self} has out-of-order control points"
            )));
        }
        Ok(())
    }

    /// The shape as a trapezoid; a triangle is a trapezoid with a single
    /// point plateau.
    fn corners(&self) -> (f64, f64, f64, f64) {
        match *self {
            Self::Triangular(a, b, c) => (a, b, b, c),
            Self::Trapezoidal(a, b, c, d) => (a, b, c, d),
        }
    }

    fn points(&self) -> Vec<f64> {
        match *self {
            Self::Triangular(a, b, c) => vec![a, b, c],
            Self::Trapezoidal(a, b, c, d) => vec![a, b, c, d],
        }
    }

    /// Degree of membership of `x`, always within `[0, 1]`.
    ///
    /// The plateau is checked first so that coinciding control points
    /// (`a == b` or `c == d`) behave as vertical edges: the edge point itself
    /// belongs to the plateau and everything beyond it is outside the support.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let (a, b, c, d) = self.corners();
        let degree = if x >= b && x <= c {
            1.0
        } else if x <= a || x >= d {
            0.0
        } else if x < b {
            slope(x - a, b - a)
        } else {
            slope(d - x, d - c)
        };
        degree.clamp(0.0, 1.0)
    }

    /// The closed interval where membership is non-zero (up to the edges).
    pub fn support(&self) -> (f64, f64) {
        let (a, _, _, d) = self.corners();
        (a, d)
    }

    /// The closed interval where membership is exactly one.
    pub fn core(&self) -> (f64, f64) {
        let (_, b, c, _) = self.corners();
        (b, c)
    }
}

// A zero-width edge is vertical, so the limit is full membership.
fn slope(rise: f64, run: f64) -> f64 {
    if run == 0.0 { 1.0 } else { rise / run }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Triangular(a, b, c) => write!(f, "trimf[{a}, {b}, {c}]"),
            Self::Trapezoidal(a, b, c, d) => write!(f, "trapmf[{a}, {b}, {c}, {d}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_of_vertical_edge_is_full() {
        assert_eq!(slope(0.0, 0.0), 1.0);
        assert_eq!(slope(1.0, 4.0), 0.25);
    }

    #[test]
    fn triangle_is_trapezoid_with_point_plateau() {
        let mf = MembershipFunction::Triangular(1.0, 2.0, 3.0);
        assert_eq!(mf.corners(), (1.0, 2.0, 2.0, 3.0));
        assert_eq!(mf.core(), (2.0, 2.0));
        assert_eq!(mf.support(), (1.0, 3.0));
    }
}
