//! Error returned by the simulated transport.

use crate::types::request::HttpMethod;
use serde::Serialize;

/// Failed simulated request.
///
/// Carries an HTTP-like status and a human readable message. It is always
/// handed back to the caller; the transport never retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub status: u16,
    pub message: String,
}

impl TransportError {
    /// Injected failure: `Failed to <METHOD> <path>` with status 500.
    pub fn failed(method: HttpMethod, path: &str) -> Self {
        Self {
            status: 500,
            message: format!("Failed to {method} {path}"),
        }
    }

    pub fn empty_path() -> Self {
        Self {
            status: 400,
            message: "Request path must not be empty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpMethod::Get, "/classes", "Failed to GET /classes")]
    #[case(HttpMethod::Post, "/complains", "Failed to POST /complains")]
    #[case(HttpMethod::Put, "/finance/expenses/1", "Failed to PUT /finance/expenses/1")]
    #[case(HttpMethod::Delete, "/users/teacher", "Failed to DELETE /users/teacher")]
    fn test_failed_message(#[case] method: HttpMethod, #[case] path: &str, #[case] expected: &str) {
        let error = TransportError::failed(method, path);
        assert_eq!(error.status, 500);
        assert_eq!(error.message, expected);
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_empty_path_is_client_error() {
        let error = TransportError::empty_path();
        assert_eq!(error.status, 400);
    }
}
