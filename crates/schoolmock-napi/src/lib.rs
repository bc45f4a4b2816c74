//! NAPI-RS bindings for the schoolmock core library.
//!
//! Exposes the simulated transport to Node.js so UI code can call it as an
//! ordinary promise-based HTTP client.

use napi_derive::napi;

mod client;
mod config;
mod error;

pub use client::*;
pub use config::*;

/// Library version
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
