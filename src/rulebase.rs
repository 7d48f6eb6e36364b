use std::collections::HashMap;
// used to print rules back in their textual form
use std::fmt;

use crate::error::{FuzzyAqiError, Result};
use crate::variable::{LinguisticVariable, NameHasher};

// ------------- Clause -------------
/// `variable is term`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    variable: String,
    term: String,
}

impl Clause {
    pub fn new(variable: &str, term: &str) -> Self {
        Self {
            variable: variable.to_owned(),
            term: term.to_owned(),
        }
    }
    pub fn variable(&self) -> &str {
        &self.variable
    }
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is {}", self.variable, self.term)
    }
}

// ------------- Rule -------------
/// A conjunctive rule: every antecedent clause is AND-ed, and the result
/// applies to a single output term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    antecedents: Vec<Clause>,
    consequent: Clause,
}

impl Rule {
    pub fn new(antecedents: Vec<Clause>, consequent: Clause) -> Self {
        Self {
            antecedents,
            consequent,
        }
    }
    pub fn antecedents(&self) -> &[Clause] {
        &self.antecedents
    }
    pub fn consequent(&self) -> &Clause {
        &self.consequent
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if ")?;
        for (i, clause) in self.antecedents.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{clause}")?;
        }
        write!(f, " then {};", self.consequent)
    }
}

// ------------- Rule base -------------
// Indexes into the engine's variables, resolved once when the rule base is built.
#[derive(Debug, Clone)]
struct Resolved {
    antecedents: Vec<(usize, usize)>,
    consequent: usize,
}

/// An ordered, validated collection of rules.
///
/// Every clause is resolved against the input and output variables when the
/// rule base is constructed; a rule naming an unknown variable or term makes
/// construction fail, it is never skipped.
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
    resolved: Vec<Resolved>,
}

impl RuleBase {
    pub fn new(
        rules: Vec<Rule>,
        inputs: &[LinguisticVariable],
        output: &LinguisticVariable,
    ) -> Result<Self> {
        let by_name: HashMap<&str, usize, NameHasher> = inputs
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name(), i))
            .collect();
        let mut resolved = Vec::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            let fail = |reason: String| {
                FuzzyAqiError::Configuration(format!("rule {} ({rule}): {reason}", position + 1))
            };
            if rule.antecedents.is_empty() {
                return Err(fail("no antecedents".into()));
            }
            let mut antecedents = Vec::with_capacity(rule.antecedents.len());
            for clause in &rule.antecedents {
                let v = match by_name.get(clause.variable()) {
                    Some(v) => *v,
                    None if clause.variable() == output.name() => {
                        return Err(fail(format!(
                            "'{}' is the output variable and cannot be an antecedent",
                            clause.variable()
                        )));
                    }
                    None => {
                        return Err(fail(format!("unknown input variable '{}'", clause.variable())));
                    }
                };
                let t = inputs[v].term_index(clause.term()).ok_or_else(|| {
                    fail(format!("unknown term '{}' for '{}'", clause.term(), clause.variable()))
                })?;
                antecedents.push((v, t));
            }
            let consequent = &rule.consequent;
            if consequent.variable() != output.name() {
                return Err(fail(format!(
                    "consequent must refer to output variable '{}', not '{}'",
                    output.name(),
                    consequent.variable()
                )));
            }
            let c = output.term_index(consequent.term()).ok_or_else(|| {
                fail(format!("unknown term '{}' for '{}'", consequent.term(), output.name()))
            })?;
            resolved.push(Resolved {
                antecedents,
                consequent: c,
            });
        }
        Ok(Self { rules, resolved })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
    /// Output term index the `i`-th rule concludes.
    pub fn consequent_term(&self, i: usize) -> usize {
        self.resolved[i].consequent
    }

    /// Firing strength of every rule, in rule order.
    ///
    /// `degrees[v][t]` is the membership of the current crisp input of input
    /// variable `v` in its term `t`. The strength of a rule is the minimum
    /// over its antecedents. All rules are evaluated, including those that
    /// end up at zero.
    pub fn firing_strengths(&self, degrees: &[Vec<f64>]) -> Vec<f64> {
        self.resolved
            .iter()
            .map(|r| {
                r.antecedents
                    .iter()
                    .map(|&(v, t)| degrees[v][t])
                    .fold(1.0, f64::min)
            })
            .collect()
    }

    /// Activation per output term: the strongest rule concluding that term.
    pub fn activations(&self, strengths: &[f64], output_terms: usize) -> Vec<f64> {
        let mut activation = vec![0.0_f64; output_terms];
        for (r, strength) in self.resolved.iter().zip(strengths) {
            activation[r.consequent] = activation[r.consequent].max(*strength);
        }
        activation
    }
}
