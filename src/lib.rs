//! Fuzzy AQI – an Air Quality Index computed by Mamdani fuzzy inference.
//!
//! Six crisp pollutant readings (PM2.5, PM10, CO, NO2, O3, SO2) go in, one
//! crisp AQI value and its category come out:
//! * Each reading is fuzzified against the terms of its
//!   [`variable::LinguisticVariable`] (`baik`, `sedang`, `buruk`,
//!   `tidak_sehat`, `parah`, `berbahaya`).
//! * Every [`rulebase::Rule`] fires with the minimum of its antecedent
//!   memberships.
//! * Each AQI term is clipped at the strongest rule concluding it and the
//!   clipped terms are combined by maximum into one [`defuzz::FuzzySet`].
//! * The centroid of that set is the AQI, which [`category::classify`] maps
//!   onto the six static bands.
//!
//! ## Modules
//! * [`membership`] – Triangular and trapezoidal membership functions.
//! * [`variable`] – Discretized universes and linguistic variables.
//! * [`rulebase`] – Conjunctive rules, validated against the variables.
//! * [`ruleset`] – Parser for the textual rule base (grammar in `ruleset.pest`).
//! * [`engine`] – The immutable [`engine::InferenceEngine`].
//! * [`defuzz`] – Output fuzzy sets and centroid defuzzification.
//! * [`category`] – The static band table with colors and recommendations.
//! * [`standard`] – The built-in AQI variables and rules, and the shared engine.
//! * [`settings`] / [`server`] – Runtime settings and the HTTP surface used by the binary.
//!
//! ## Errors
//! Configuration mistakes are caught when an engine is built. At compute
//! time an input outside its variable's universe is rejected rather than
//! clamped, and an aggregated output that is zero everywhere is reported as
//! [`FuzzyAqiError::NoRuleFired`] rather than as a number.
//!
//! ## Quick Start
//! ```
//! use fuzzy_aqi::standard::{assess, Readings};
//! use fuzzy_aqi::category::Category;
//! let clean = assess(&Readings::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)).unwrap();
//! assert_eq!(clean.band.category, Category::Baik);
//! assert!(clean.aqi < 50.0);
//! ```
//!
//! ## Concurrency
//! The shared engine returned by [`standard::engine`] is built once, on
//! first use, and is only ever read afterwards. Each computation works on
//! its own buffers, so the engine can be used from any number of threads
//! without locking.

pub mod category;
pub mod defuzz;
pub mod engine;
pub mod error;
pub mod membership;
pub mod rulebase;
pub mod ruleset;
pub mod server;
pub mod settings;
pub mod standard;
pub mod variable;

pub use error::{FuzzyAqiError, Result};
