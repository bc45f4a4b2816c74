//! Fixture overrides loaded from YAML/JSON/JSONC files.
//!
//! An override file holds a list of entries, each naming exactly one
//! matcher and the payload to answer with:
//!
//! ```yaml
//! - id: empty-classes
//!   contains: /classes
//!   data: []
//! - id: teacher-users
//!   segment: /users
//!   data: [{ id: user-1, name: Ms. Rao }]
//! ```

use crate::config::error::ConfigError;
use crate::config::parser;
use crate::fixtures::dispatch::DispatchRule;
use crate::matching::PathMatcher;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureOverride {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    pub data: Value,
}

impl FixtureOverride {
    pub fn matcher(&self) -> Result<PathMatcher, ConfigError> {
        match (&self.contains, &self.segment) {
            (Some(needle), None) if !needle.is_empty() => Ok(PathMatcher::contains(needle)),
            (None, Some(prefix)) if !prefix.is_empty() => Ok(PathMatcher::segment(prefix)),
            _ => Err(ConfigError::Invalid(format!(
                "fixture '{}' must set exactly one non-empty 'contains' or 'segment'",
                self.id
            ))),
        }
    }

    pub fn into_rule(self) -> Result<DispatchRule, ConfigError> {
        let matcher = self.matcher()?;
        Ok(DispatchRule::fixed(self.id, matcher, self.data))
    }
}

/// Load overrides from every file matching `pattern` as dispatch rules.
pub fn load_overrides(pattern: &str) -> Result<Vec<DispatchRule>, ConfigError> {
    parser::load_all::<FixtureOverride>(pattern)?
        .into_iter()
        .map(FixtureOverride::into_rule)
        .collect()
}
