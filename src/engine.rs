//! The Mamdani inference pipeline.
//!
//! An [`InferenceEngine`] owns its input variables, its output variable and
//! its [`RuleBase`]. It is immutable after [`InferenceEngine::new`], so one
//! instance can be shared by reference (or through an `Arc`) between any
//! number of threads. Every call to [`InferenceEngine::evaluate`] allocates
//! its own aggregation buffer.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::defuzz::FuzzySet;
use crate::error::{FuzzyAqiError, Result};
use crate::rulebase::{Rule, RuleBase};
use crate::variable::{LinguisticVariable, NameHasher};

/// Everything a single evaluation produced, kept for inspection.
#[derive(Debug, Clone)]
pub struct Inference {
    /// `memberships[v][t]`: degree of the crisp input of variable `v` in term `t`.
    pub memberships: Vec<Vec<f64>>,
    /// Firing strength of every rule, in rule base order.
    pub strengths: Vec<f64>,
    /// Clipping level applied to every output term.
    pub activations: Vec<f64>,
    /// The aggregated output fuzzy set.
    pub aggregated: FuzzySet,
    /// Centroid of `aggregated`.
    pub crisp: f64,
}

#[derive(Debug)]
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: RuleBase,
    // output_terms[t][i]: membership of output point i in output term t,
    // sampled once here instead of on every evaluation
    output_terms: Vec<Vec<f64>>,
}

impl InferenceEngine {
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: Vec<Rule>,
    ) -> Result<Self> {
        let mut seen = HashSet::<&str, NameHasher>::default();
        for v in inputs.iter().chain(std::iter::once(&output)) {
            if !seen.insert(v.name()) {
                return Err(FuzzyAqiError::Configuration(format!(
                    "duplicate variable '{}'",
                    v.name()
                )));
            }
            if v.is_empty() {
                return Err(FuzzyAqiError::Configuration(format!(
                    "variable '{}' has no terms",
                    v.name()
                )));
            }
        }
        if rules.is_empty() {
            return Err(FuzzyAqiError::Configuration("rule base is empty".into()));
        }
        let rules = RuleBase::new(rules, &inputs, &output)?;
        let universe = output.universe();
        let output_terms = output
            .terms()
            .map(|(_, mf)| universe.points().map(|y| mf.evaluate(y)).collect())
            .collect();
        debug!(
            inputs = inputs.len(),
            output = output.name(),
            output_points = universe.len(),
            rules = rules.len(),
            "built inference engine"
        );
        Ok(Self {
            inputs,
            output,
            rules,
            output_terms,
        })
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }
    pub fn input(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.iter().find(|v| v.name() == name)
    }
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }
    pub fn rule_base(&self) -> &RuleBase {
        &self.rules
    }

    /// Rejects inputs of the wrong count, non-finite inputs and inputs
    /// outside their variable's universe.
    fn check(&self, crisp: &[f64]) -> Result<()> {
        if crisp.len() != self.inputs.len() {
            return Err(FuzzyAqiError::Arity {
                expected: self.inputs.len(),
                actual: crisp.len(),
            });
        }
        for (v, &x) in self.inputs.iter().zip(crisp) {
            let u = v.universe();
            if !x.is_finite() || !u.contains(x) {
                return Err(FuzzyAqiError::InputOutOfRange {
                    variable: v.name().to_owned(),
                    value: x,
                    min: u.min(),
                    max: u.max(),
                });
            }
        }
        Ok(())
    }

    /// Runs fuzzification, rule firing, min-implication, max-aggregation and
    /// centroid defuzzification for one input vector, ordered like
    /// [`Self::inputs`].
    pub fn evaluate(&self, crisp: &[f64]) -> Result<Inference> {
        self.check(crisp)?;
        let memberships: Vec<Vec<f64>> = self
            .inputs
            .iter()
            .zip(crisp)
            .map(|(v, &x)| v.degrees(x))
            .collect();
        let strengths = self.rules.firing_strengths(&memberships);
        let activations = self.rules.activations(&strengths, self.output.len());

        let mut aggregated = FuzzySet::empty(*self.output.universe());
        for (term, &level) in self.output_terms.iter().zip(&activations) {
            if level == 0.0 {
                continue;
            }
            for (acc, &m) in aggregated.memberships_mut().iter_mut().zip(term) {
                *acc = acc.max(m.min(level));
            }
        }

        let crisp_out = aggregated.centroid().ok_or_else(|| FuzzyAqiError::NoRuleFired {
            output: self.output.name().to_owned(),
        })?;
        trace!(
            fired = strengths.iter().filter(|s| **s > 0.0).count(),
            output = crisp_out,
            "evaluated"
        );
        Ok(Inference {
            memberships,
            strengths,
            activations,
            aggregated,
            crisp: crisp_out,
        })
    }

    /// The crisp output for one input vector.
    pub fn compute(&self, crisp: &[f64]) -> Result<f64> {
        self.evaluate(crisp).map(|inference| inference.crisp)
    }
}
