//! Simulated HTTP transport and fixture APIs for the school administration UI.
//!
//! - [`transport`]: [`MockHttpClient`], which answers `get`/`post`/`put`/`delete`
//!   after an artificial delay, with random failure injection
//! - [`fixtures`]: the ordered path dispatch table behind `GET` payloads
//! - [`domain`]: fixture-backed APIs for observations, terms, templates and
//!   related records
//! - [`config`]: simulator settings loaded from YAML/JSON/JSONC files

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod matching;
pub mod transport;
pub mod types;

pub use config::{ConfigError, SimulatorConfig};
pub use transport::{MockHttpClient, TransportError};
pub use types::envelope::ApiEnvelope;
pub use types::request::{HttpMethod, Request, RequestConfig};
pub use types::response::Response;
