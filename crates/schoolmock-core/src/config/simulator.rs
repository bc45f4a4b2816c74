//! Simulator settings: latency window, error rate, seed and fixture files.

use crate::config::error::ConfigError;
use crate::config::parser;
use crate::transport::failure::DEFAULT_ERROR_RATE;
use crate::transport::latency::LatencyProfile;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Latency window in milliseconds, `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 1500,
        }
    }
}

impl From<LatencyConfig> for LatencyProfile {
    fn from(config: LatencyConfig) -> Self {
        LatencyProfile::new(
            Duration::from_millis(config.min_ms),
            Duration::from_millis(config.max_ms),
        )
    }
}

/// Top-level simulator configuration.
///
/// Every field is optional in a config file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorConfig {
    pub latency: LatencyConfig,
    /// Probability in `[0, 1]` that a request fails
    pub error_rate: f64,
    /// Seed for delay and failure draws; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Glob patterns of fixture override files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixtures: Vec<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            error_rate: DEFAULT_ERROR_RATE,
            seed: None,
            fixtures: Vec::new(),
        }
    }
}

impl SimulatorConfig {
    /// Read, parse (by extension) and validate a config file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config: Self = parser::load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config content; `path` only selects the format.
    pub fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = parser::parse_config(content, path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.latency.min_ms > self.latency.max_ms {
            return Err(ConfigError::Invalid(format!(
                "latency minMs ({}) exceeds maxMs ({})",
                self.latency.min_ms, self.latency.max_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.error_rate) {
            return Err(ConfigError::Invalid(format!(
                "errorRate must be within [0, 1], got {}",
                self.error_rate
            )));
        }
        Ok(())
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        self.latency.into()
    }
}
