//! NAPI bindings for the simulated HTTP client.

use crate::config::{Response, SimulatorOptions};
use crate::error::{to_napi_error, HttpStatus};
use napi::bindgen_prelude::*;
use napi_derive::napi;
use schoolmock_core::config::SimulatorConfig;
use schoolmock_core::transport::MockHttpClient as CoreMockHttpClient;
use schoolmock_core::types::request::RequestConfig;
use std::sync::Arc;

#[napi]
pub struct MockHttpClient {
    inner: Arc<CoreMockHttpClient>,
}

#[napi]
impl MockHttpClient {
    /// Create a client
    ///
    /// @param configPath - Optional YAML/JSON/JSONC simulator config file
    #[napi(constructor)]
    pub fn new(config_path: Option<String>) -> Result<Self> {
        let config = match config_path {
            Some(path) => SimulatorConfig::load(&path)
                .map_err(|e| Error::from_reason(format!("Failed to load config: {e}")))?,
            None => SimulatorConfig::default(),
        };
        Self::from_config(&config)
    }

    /// Create a client from inline options
    #[napi(factory)]
    pub fn with_options(options: SimulatorOptions) -> Result<Self> {
        Self::from_config(&options.into())
    }

    fn from_config(config: &SimulatorConfig) -> Result<Self> {
        let client = CoreMockHttpClient::from_config(config)
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(client),
        })
    }

    /// @param params - Optional query parameters passed to the payload factory
    ///
    /// Rejects with the transport message; `code` is the HTTP status.
    #[napi]
    pub async fn get(
        &self,
        path: String,
        params: Option<serde_json::Value>,
    ) -> Result<Response, HttpStatus> {
        let client = Arc::clone(&self.inner);
        client
            .get(&path, request_config(params))
            .await
            .map(Response::from)
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn post(
        &self,
        path: String,
        body: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> Result<Response, HttpStatus> {
        let client = Arc::clone(&self.inner);
        client
            .post(&path, body, request_config(params))
            .await
            .map(Response::from)
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn put(
        &self,
        path: String,
        body: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> Result<Response, HttpStatus> {
        let client = Arc::clone(&self.inner);
        client
            .put(&path, body, request_config(params))
            .await
            .map(Response::from)
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn delete(
        &self,
        path: String,
        params: Option<serde_json::Value>,
    ) -> Result<Response, HttpStatus> {
        let client = Arc::clone(&self.inner);
        client
            .delete(&path, request_config(params))
            .await
            .map(Response::from)
            .map_err(to_napi_error)
    }
}

/// Non-object params are ignored.
fn request_config(params: Option<serde_json::Value>) -> Option<RequestConfig> {
    match params {
        Some(serde_json::Value::Object(map)) => Some(RequestConfig::with_params(map)),
        _ => None,
    }
}

