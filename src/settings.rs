//! Runtime settings, read once at startup.
//!
//! Sources, later ones winning: built-in defaults, the optional settings
//! file (`fuzzy-aqi.toml` unless another path is given), then environment
//! variables such as `FUZZY_AQI__SERVER__ADDRESS=0.0.0.0:8080`.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::engine::InferenceEngine;
use crate::error::{FuzzyAqiError, Result};
use crate::standard;

pub const DEFAULT_FILE: &str = "fuzzy-aqi.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
    #[serde(default)]
    pub rules: RuleSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSettings {
    /// Rule text replacing the built-in rule base.
    pub path: Option<PathBuf>,
}

impl Settings {
    pub fn load(file: Option<&str>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.address", "127.0.0.1:8080")?
            .set_default("log.filter", "info")?
            .add_source(File::with_name(file.unwrap_or(DEFAULT_FILE)).required(file.is_some()))
            .add_source(Environment::with_prefix("FUZZY_AQI").prefix_separator("__").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The engine these settings call for. Without a rule file this is the
    /// shared built-in engine; with one, a new engine is built from it.
    pub fn engine(&self) -> Result<EngineHandle> {
        match &self.rules.path {
            None => Ok(EngineHandle::Shared(standard::engine()?)),
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    FuzzyAqiError::Settings(format!("cannot read rules from {}: {e}", path.display()))
                })?;
                Ok(EngineHandle::Owned(standard::build_engine(&text)?))
            }
        }
    }
}

/// Either the process-wide built-in engine or one built from a rule file.
#[derive(Debug)]
pub enum EngineHandle {
    Shared(&'static InferenceEngine),
    Owned(InferenceEngine),
}

impl std::ops::Deref for EngineHandle {
    type Target = InferenceEngine;
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Shared(engine) => engine,
            Self::Owned(engine) => engine,
        }
    }
}
