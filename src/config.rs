//! Advisor configuration loaded from JSON.
//!
//! ```json
//! {
//!   "name": "tournament",
//!   "equity": { "samples": 50000, "seed": 7, "exhaustive_limit": 100000 },
//!   "ranges": "ranges/tight.json"
//! }
//! ```
//!
//! Every field is optional. A relative `ranges` path in a config file is
//! resolved against the directory holding that file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::equity::EquityConfig;
use crate::error::ConfigError;
use crate::tables::RangeTables;

/// Top-level configuration for an [`Analyzer`](crate::Analyzer).
///
/// # Example
/// ```
/// use holdem_advisor::AdvisorConfig;
///
/// let config = AdvisorConfig::from_json_str(r#"{ "equity": { "samples": 500 } }"#).unwrap();
/// assert_eq!(config.equity.samples, 500);
/// assert!(config.ranges.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Label shown in logs and front-end output.
    pub name: String,

    /// Equity simulation settings.
    pub equity: EquityConfig,

    /// Range-table file replacing the built-in tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<PathBuf>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            equity: EquityConfig::default(),
            ranges: None,
        }
    }
}

impl AdvisorConfig {
    /// Load and validate a configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&content)?;

        if let (Some(ranges), Some(dir)) = (&config.ranges, path.parent()) {
            if ranges.is_relative() {
                config.ranges = Some(dir.join(ranges));
            }
        }

        log::info!("loaded config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.equity.samples == 0 {
            return Err(ConfigError::NoSamples);
        }
        Ok(())
    }

    /// The range tables this configuration selects.
    pub fn load_tables(&self) -> Result<Arc<RangeTables>, ConfigError> {
        match &self.ranges {
            Some(path) => {
                let tables = RangeTables::from_json_file(path)?;
                log::info!("using range tables from {}", path.display());
                Ok(Arc::new(tables))
            }
            None => Ok(RangeTables::builtin()),
        }
    }

    /// Builder method: set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method: set the equity settings.
    pub fn with_equity(mut self, equity: EquityConfig) -> Self {
        self.equity = equity;
        self
    }

    /// Builder method: set the range-table file.
    pub fn with_ranges(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranges = Some(path.into());
        self
    }
}
