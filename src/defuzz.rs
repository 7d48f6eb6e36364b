//! Discretized output fuzzy sets and their reduction to a crisp value.

use crate::variable::Universe;

/// Membership values sampled at every discretization point of a universe.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzySet {
    universe: Universe,
    memberships: Vec<f64>,
}

impl FuzzySet {
    /// An all-zero set over `universe`.
    pub fn empty(universe: Universe) -> Self {
        Self {
            memberships: vec![0.0; universe.len()],
            universe,
        }
    }
    pub fn universe(&self) -> &Universe {
        &self.universe
    }
    pub fn memberships(&self) -> &[f64] {
        &self.memberships
    }
    pub fn memberships_mut(&mut self) -> &mut [f64] {
        &mut self.memberships
    }
    /// `(y, μ(y))` for every discretization point.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.memberships
            .iter()
            .enumerate()
            .map(|(i, m)| (self.universe.point(i), *m))
    }
    pub fn height(&self) -> f64 {
        self.memberships.iter().fold(0.0, |a, &b| a.max(b))
    }
    pub fn is_zero(&self) -> bool {
        self.memberships.iter().all(|m| *m == 0.0)
    }

    /// Center of gravity: `Σ y·μ(y) / Σ μ(y)` over the discretization points.
    ///
    /// `None` when every membership is zero, since the quotient is undefined.
    pub fn centroid(&self) -> Option<f64> {
        let (weighted, total) = self
            .iter()
            .fold((0.0, 0.0), |(w, t), (y, m)| (w + y * m, t + m));
        if total == 0.0 {
            None
        } else {
            Some(weighted / total)
        }
    }
}
