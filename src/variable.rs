// the term index is a plain hashmap, but with a faster hasher
use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use seahash::SeaHasher;

// used to check that names can be written in the rule text
use regex::Regex;
use lazy_static::lazy_static;

use crate::error::{FuzzyAqiError, Result};
use crate::membership::MembershipFunction;

pub type NameHasher = BuildHasherDefault<SeaHasher>;

lazy_static! {
    static ref NAME: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_.]*$").unwrap();
}

pub(crate) fn check_name(kind: &str, name: &str) -> Result<()> {
    if NAME.is_match(name) {
        Ok(())
    } else {
        Err(FuzzyAqiError::Configuration(format!("invalid {kind} name '{name}'")))
    }
}

// ------------- Universe -------------
/// A closed interval `[min, max]` discretized with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(FuzzyAqiError::Configuration(format!(
                "universe [{min}, {max}] step {step} is not finite"
            )));
        }
        if min > max || step <= 0.0 {
            return Err(FuzzyAqiError::Configuration(format!(
                "universe [{min}, {max}] step {step} is empty"
            )));
        }
        Ok(Self { min, max, step })
    }
    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
    /// Number of discretization points, both ends included when the step
    /// divides the interval.
    pub fn len(&self) -> usize {
        ((self.max - self.min) / self.step + 1e-9).floor() as usize + 1
    }
    /// The `i`-th discretization point. Computed from the index rather than
    /// accumulated, so the last point lands exactly on `max` for integral steps.
    pub fn point(&self, i: usize) -> f64 {
        self.min + i as f64 * self.step
    }
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }
}

// ------------- Linguistic variable -------------
/// A named universe described by an ordered set of named membership terms.
///
/// Terms keep the order in which they were added, which for the AQI
/// variables runs from the best to the worst air quality.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<(String, MembershipFunction)>,
    lookup: HashMap<String, usize, NameHasher>,
}

impl LinguisticVariable {
    pub fn new(name: &str, universe: Universe) -> Result<Self> {
        check_name("variable", name)?;
        Ok(Self {
            name: name.to_owned(),
            universe,
            terms: Vec::new(),
            lookup: HashMap::default(),
        })
    }

    /// Adds a term, consuming and returning the variable so definitions can
    /// be chained with `?`.
    pub fn term(mut self, name: &str, membership: MembershipFunction) -> Result<Self> {
        check_name("term", name)?;
        membership.validate().map_err(|e| match e {
            FuzzyAqiError::Configuration(m) => {
                FuzzyAqiError::Configuration(format!("{}.{name}: {m}", self.name))
            }
            other => other,
        })?;
        if self.lookup.contains_key(name) {
            return Err(FuzzyAqiError::Configuration(format!(
                "duplicate term '{name}' in variable '{}'",
                self.name
            )));
        }
        self.lookup.insert(name.to_owned(), self.terms.len());
        self.terms.push((name.to_owned(), membership));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn universe(&self) -> &Universe {
        &self.universe
    }
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }
    pub fn membership(&self, name: &str) -> Option<&MembershipFunction> {
        self.term_index(name).map(|i| &self.terms[i].1)
    }
    pub fn terms(&self) -> impl Iterator<Item = (&str, &MembershipFunction)> {
        self.terms.iter().map(|(n, mf)| (n.as_str(), mf))
    }

    /// Membership of `x` in every term, in term order.
    ///
    /// `x` is not checked against the universe; terms whose support does not
    /// reach `x` simply report 0.
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.terms.iter().map(|(n, mf)| (n.as_str(), mf.evaluate(x))).collect()
    }

    /// Same as [`Self::fuzzify`] without the names.
    pub fn degrees(&self, x: f64) -> Vec<f64> {
        self.terms.iter().map(|(_, mf)| mf.evaluate(x)).collect()
    }

    /// The term with the highest membership for `x`, first one on ties.
    pub fn dominant_term(&self, x: f64) -> Option<(&str, f64)> {
        self.fuzzify(x)
            .into_iter()
            .fold(None, |best, (n, m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((n, m)),
            })
            .filter(|(_, m)| *m > 0.0)
    }
}
