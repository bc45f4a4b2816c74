//! Request descriptor types.

use crate::matching::parse_query_string;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Query parameters attached to a request.
pub type Params = Map<String, Value>;

/// HTTP verb supported by the simulated transport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options, the equivalent of an HTTP client's request config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Query parameters handed to the payload factory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    /// Header hints (carried but never inspected)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl RequestConfig {
    pub fn with_params(params: Params) -> Self {
        Self {
            params: Some(params),
            headers: None,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A single simulated request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: HttpMethod,
    /// Request path, optionally with a query string
    pub path: String,
    pub params: Option<Params>,
    pub headers: Option<HashMap<String, String>>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: None,
            headers: None,
            body: None,
        }
    }

    pub fn with_config(mut self, config: Option<RequestConfig>) -> Self {
        if let Some(config) = config {
            self.params = config.params;
            self.headers = config.headers;
        }
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path without its query string or fragment.
    pub fn route_path(&self) -> &str {
        self.path
            .split(['?', '#'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Query string parameters merged with explicit `params`.
    ///
    /// Explicit params take precedence over the ones embedded in the path.
    /// Returns `None` when neither source carries anything.
    pub fn effective_params(&self) -> Option<Params> {
        let embedded = self
            .path
            .split('#')
            .next()
            .and_then(|p| p.split_once('?'))
            .map(|(_, query)| parse_query_string(query))
            .unwrap_or_default();

        if embedded.is_empty() {
            return self.params.clone();
        }

        let mut merged: Params = embedded
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        if let Some(explicit) = &self.params {
            for (k, v) in explicit {
                merged.insert(k.clone(), v.clone());
            }
        }
        Some(merged)
    }
}
