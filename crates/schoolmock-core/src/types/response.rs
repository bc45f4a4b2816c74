//! Success envelope returned by the simulated transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of a successful simulated request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Response payload
    pub data: Value,
    /// HTTP status code
    pub status: u16,
    /// HTTP reason phrase
    pub status_text: String,
}

impl Response {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            status: 200,
            status_text: "OK".to_string(),
        }
    }

    pub fn created(data: Value) -> Self {
        Self {
            data,
            status: 201,
            status_text: "Created".to_string(),
        }
    }
}
