//! Plain JS objects exchanged with the client.

use napi_derive::napi;
use schoolmock_core::config::{LatencyConfig, SimulatorConfig};
use schoolmock_core::types::response::Response as CoreResponse;

/// Successful response: `{ data, status, statusText }`
#[napi(object)]
#[derive(Clone)]
pub struct Response {
    pub data: serde_json::Value,
    pub status: u32,
    pub status_text: String,
}

impl From<CoreResponse> for Response {
    fn from(r: CoreResponse) -> Self {
        Self {
            data: r.data,
            status: u32::from(r.status),
            status_text: r.status_text,
        }
    }
}

/// Inline simulator settings; omitted fields take the defaults.
#[napi(object)]
#[derive(Clone, Default)]
pub struct SimulatorOptions {
    pub min_delay_ms: Option<u32>,
    pub max_delay_ms: Option<u32>,
    pub error_rate: Option<f64>,
    pub seed: Option<u32>,
    pub fixtures: Option<Vec<String>>,
}

impl From<SimulatorOptions> for SimulatorConfig {
    fn from(o: SimulatorOptions) -> Self {
        let defaults = SimulatorConfig::default();
        Self {
            latency: LatencyConfig {
                min_ms: o
                    .min_delay_ms
                    .map_or(defaults.latency.min_ms, u64::from),
                max_ms: o
                    .max_delay_ms
                    .map_or(defaults.latency.max_ms, u64::from),
            },
            error_rate: o.error_rate.unwrap_or(defaults.error_rate),
            seed: o.seed.map(u64::from),
            fixtures: o.fixtures.unwrap_or_default(),
        }
    }
}
