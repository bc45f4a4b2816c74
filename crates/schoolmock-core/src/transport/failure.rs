//! Failure injection strategies.

use crate::types::request::Request;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;

/// Probability that a request fails when no other rate is configured.
pub const DEFAULT_ERROR_RATE: f64 = 0.05;

/// Decides, once per request, whether the request fails.
pub trait FailureInjector: Send + Sync + fmt::Debug {
    fn should_fail(&self, request: &Request) -> bool;
}

/// Fails each request independently with probability `rate`.
#[derive(Debug)]
pub struct RandomFailure {
    rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomFailure {
    /// Rates outside `[0, 1]` are clamped.
    pub fn new(rate: f64) -> Self {
        Self::with_rng(rate, StdRng::from_entropy())
    }

    /// Reproducible sequence of decisions for a given seed.
    pub fn seeded(rate: f64, seed: u64) -> Self {
        Self::with_rng(rate, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rate: f64, rng: StdRng) -> Self {
        Self {
            rate: if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) },
            rng: Mutex::new(rng),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for RandomFailure {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_RATE)
    }
}

impl FailureInjector for RandomFailure {
    fn should_fail(&self, _request: &Request) -> bool {
        let draw: f64 = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen()
        };
        draw < self.rate
    }
}

/// Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureInjector for NeverFail {
    fn should_fail(&self, _request: &Request) -> bool {
        false
    }
}

/// Fails every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailureInjector for AlwaysFail {
    fn should_fail(&self, _request: &Request) -> bool {
        true
    }
}
