//! Artificial latency.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Uniform delay range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub min: Duration,
    pub max: Duration,
}

impl LatencyProfile {
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    /// No delay at all.
    pub const fn instant() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// Draw a delay with millisecond granularity.
    ///
    /// A range narrower than one millisecond always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let span = self.max.saturating_sub(self.min).as_millis();
        let span = u64::try_from(span).unwrap_or(u64::MAX);
        if span == 0 {
            return self.min;
        }
        self.min + Duration::from_millis(rng.gen_range(0..span))
    }
}

impl Default for LatencyProfile {
    /// 500 ms up to (not including) 1500 ms.
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(1500))
    }
}

/// A [`LatencyProfile`] paired with its own random source.
#[derive(Debug)]
pub struct LatencySampler {
    profile: LatencyProfile,
    rng: Mutex<StdRng>,
}

impl LatencySampler {
    pub fn new(profile: LatencyProfile) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(profile: LatencyProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn profile(&self) -> LatencyProfile {
        self.profile
    }

    pub fn sample(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.profile.sample(&mut *rng)
    }

    /// Sleep for a freshly sampled delay and return it.
    pub async fn wait(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

impl Default for LatencySampler {
    fn default() -> Self {
        Self::new(LatencyProfile::default())
    }
}
