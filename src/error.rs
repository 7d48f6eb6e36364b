use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyAqiError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Input out of range: {variable} = {value} (valid range {min}..={max})")]
    InputOutOfRange { variable: String, value: f64, min: f64, max: f64 },
    #[error("Expected {expected} crisp inputs, got {actual}")]
    Arity { expected: usize, actual: usize },
    #[error("No rule fired: the aggregated {output} fuzzy set is empty")]
    NoRuleFired { output: String },
    #[error("Parse error: {message}")]
    Parse { message: String, line: Option<usize>, col: Option<usize> },
    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, FuzzyAqiError>;

impl FuzzyAqiError {
    /// True for errors raised while computing a submitted reading: bad
    /// values, a wrong input count, or readings the rule base does not cover.
    /// The last one points at gaps in a custom rule base but is still
    /// reported against the request that hit it.
    pub fn is_compute_error(&self) -> bool {
        matches!(
            self,
            Self::InputOutOfRange { .. } | Self::Arity { .. } | Self::NoRuleFired { .. }
        )
    }
}

// Helper conversions
impl From<config::ConfigError> for FuzzyAqiError {
    fn from(e: config::ConfigError) -> Self { Self::Settings(e.to_string()) }
}
