//! Generic fixture-backed API shared by the domain modules.

use crate::transport::clock::{iso_timestamp, mock_id, Clock, SystemClock};
use crate::transport::latency::{LatencyProfile, LatencySampler};
use crate::types::envelope::ApiEnvelope;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Delay applied by the domain APIs unless configured otherwise.
pub const DEFAULT_DOMAIN_DELAY: Duration = Duration::from_millis(500);

/// A record type served from fixtures.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Human readable name used in messages, e.g. `Observation`
    const KIND: &'static str;
    /// Prefix of synthesized ids, e.g. `obs`
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// Canned records served by a fresh API.
    fn fixtures() -> Vec<Self>;
}

/// Read-only fixture API with artificial latency.
///
/// Create, update and delete answer as if they succeeded but never touch
/// the fixtures; every call sees the same records.
#[derive(Debug)]
pub struct FixtureApi<R> {
    records: Vec<R>,
    latency: LatencySampler,
    clock: Arc<dyn Clock>,
}

impl<R: Record> FixtureApi<R> {
    pub fn new() -> Self {
        Self::with_records(R::fixtures())
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records,
            latency: LatencySampler::new(LatencyProfile::fixed(DEFAULT_DOMAIN_DELAY)),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_latency(mut self, profile: LatencyProfile) -> Self {
        self.latency = LatencySampler::new(profile);
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Fixtures without any delay.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub async fn list(&self) -> ApiEnvelope<Vec<R>> {
        self.filter(|_| true).await
    }

    pub async fn filter<P>(&self, predicate: P) -> ApiEnvelope<Vec<R>>
    where
        P: Fn(&R) -> bool,
    {
        self.latency.wait().await;
        let data: Vec<R> = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        debug!(kind = R::KIND, count = data.len(), "fixture list");
        ApiEnvelope::success(data)
    }

    pub async fn find(&self, id: &str) -> ApiEnvelope<Option<R>> {
        self.latency.wait().await;
        match self.lookup(id) {
            Some(record) => ApiEnvelope::success(Some(record.clone())),
            None => ApiEnvelope::failure(None, not_found::<R>()),
        }
    }

    /// Echo `draft` back with a synthesized `id` and `createdAt`.
    pub async fn create(&self, draft: Value) -> ApiEnvelope<Value> {
        self.latency.wait().await;
        let now = self.clock.now();
        let mut data = object_fields(draft);
        data.insert("id".to_string(), Value::String(mock_id(R::ID_PREFIX, now)));
        data.insert("createdAt".to_string(), Value::String(iso_timestamp(now)));
        ApiEnvelope::with_message(
            Value::Object(data),
            format!("{} created successfully", R::KIND),
        )
    }

    /// The stored record with `patch` applied on top and a fresh `updatedAt`.
    ///
    /// The record id cannot be changed through the patch.
    pub async fn update(&self, id: &str, patch: Value) -> ApiEnvelope<Option<Value>> {
        self.latency.wait().await;
        let Some(record) = self.lookup(id) else {
            return ApiEnvelope::failure(None, not_found::<R>());
        };
        let base = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                return ApiEnvelope::failure(
                    None,
                    format!("Failed to update {}: {e}", R::KIND),
                )
            }
        };

        let mut data = object_fields(base);
        data.extend(object_fields(patch));
        data.insert("id".to_string(), Value::String(record.id().to_owned()));
        data.insert(
            "updatedAt".to_string(),
            Value::String(iso_timestamp(self.clock.now())),
        );
        ApiEnvelope::with_message(
            Some(Value::Object(data)),
            format!("{} updated successfully", R::KIND),
        )
    }

    /// Confirm deletion of a known id; the fixtures are left untouched.
    pub async fn delete(&self, id: &str) -> ApiEnvelope<Option<String>> {
        self.latency.wait().await;
        if self.lookup(id).is_none() {
            return ApiEnvelope::failure(None, not_found::<R>());
        }
        ApiEnvelope::with_message(
            Some(id.to_owned()),
            format!("{} deleted successfully", R::KIND),
        )
    }

    fn lookup(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}

impl<R: Record> Default for FixtureApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<R: Record>() -> String {
    format!("{} not found", R::KIND)
}

fn object_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}
