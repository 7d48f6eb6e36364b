//! Parser for the textual rule base.
//!
//! ```text
//! # all pollutants at their cleanest
//! if PM2.5 is baik and PM10 is baik then AQI is baik;
//! if PM2.5 is sedang then AQI is sedang;
//! ```
//!
//! Keywords are case-insensitive, names are case-sensitive. Parsing only
//! checks the syntax; names are resolved when the rules are handed to
//! [`crate::rulebase::RuleBase::new`].

use pest::Parser;
use pest::error::{Error as PestError, LineColLocation};
use pest::iterators::Pair;

use crate::error::{FuzzyAqiError, Result};
use crate::rulebase::{Clause, Rule};

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "ruleset.pest"]
    pub struct RuleTextParser;
}

use grammar::{Rule as Syntax, RuleTextParser};

impl From<PestError<Syntax>> for FuzzyAqiError {
    fn from(e: PestError<Syntax>) -> Self {
        let (line, col) = match e.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };
        Self::Parse {
            message: format!("{} at line {line}, column {col}", e.variant.message()),
            line: Some(line),
            col: Some(col),
        }
    }
}

fn malformed(what: &str, pair: &Pair<Syntax>) -> FuzzyAqiError {
    let (line, col) = pair.as_span().start_pos().line_col();
    FuzzyAqiError::Parse {
        message: format!("malformed {what} '{}'", pair.as_str()),
        line: Some(line),
        col: Some(col),
    }
}

fn clause(pair: Pair<Syntax>) -> Result<Clause> {
    let mut names = pair.clone().into_inner().map(|p| p.as_str());
    match (names.next(), names.next()) {
        (Some(variable), Some(term)) => Ok(Clause::new(variable, term)),
        _ => Err(malformed("clause", &pair)),
    }
}

fn rule(pair: Pair<Syntax>) -> Result<Rule> {
    let mut antecedents = Vec::new();
    let mut consequent = None;
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Syntax::antecedent => {
                for c in part.into_inner() {
                    antecedents.push(clause(c)?);
                }
            }
            Syntax::consequent => {
                if let Some(c) = part.into_inner().next() {
                    consequent = Some(clause(c)?);
                }
            }
            _ => (),
        }
    }
    match consequent {
        Some(consequent) if !antecedents.is_empty() => Ok(Rule::new(antecedents, consequent)),
        _ => Err(malformed("rule", &pair)),
    }
}

/// Parses a complete rule text into rules, in the order they appear.
pub fn parse(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for pair in RuleTextParser::parse(Syntax::ruleset, text)? {
        for item in pair.into_inner() {
            if item.as_rule() == Syntax::rule {
                rules.push(rule(item)?);
            }
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_conjunction_and_comments() {
        let rules = parse(
            "# leading comment\n\
             IF PM2.5 is baik AND PM10 is baik THEN AQI is baik;\n\
             if CO is parah then AQI is parah; # trailing\n",
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].antecedents().len(), 2);
        assert_eq!(rules[0].antecedents()[0], Clause::new("PM2.5", "baik"));
        assert_eq!(rules[1].consequent(), &Clause::new("AQI", "parah"));
    }

    #[test]
    fn empty_text_has_no_rules() {
        assert!(parse("  # nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn display_round_trips_through_parser() {
        let rules = parse("if SO2 is tidak_sehat and O3 is buruk then AQI is tidak_sehat;").unwrap();
        let again = parse(&rules[0].to_string()).unwrap();
        assert_eq!(rules, again);
    }

    #[test]
    fn missing_terminator_reports_position() {
        let err = parse("if CO is baik then AQI is baik\nif").unwrap_err();
        match err {
            FuzzyAqiError::Parse { line, col, .. } => {
                assert!(line.is_some() && col.is_some());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
