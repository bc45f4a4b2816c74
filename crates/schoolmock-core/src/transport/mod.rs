//! Simulated HTTP transport.
//!
//! [`MockHttpClient`] stands in for a network client: every call waits for an
//! artificial delay, may fail through a [`FailureInjector`], and otherwise
//! answers with a payload synthesized from the request.

pub mod client;
pub mod clock;
pub mod error;
pub mod failure;
pub mod latency;

pub use client::MockHttpClient;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TransportError;
pub use failure::{AlwaysFail, FailureInjector, NeverFail, RandomFailure, DEFAULT_ERROR_RATE};
pub use latency::{LatencyProfile, LatencySampler};
