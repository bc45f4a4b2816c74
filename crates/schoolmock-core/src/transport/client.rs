//! Simulated HTTP client.

use crate::config::error::ConfigError;
use crate::config::simulator::SimulatorConfig;
use crate::fixtures::dispatch::DispatchTable;
use crate::fixtures::overrides::load_overrides;
use crate::transport::clock::{iso_timestamp, mock_id, Clock, SystemClock};
use crate::transport::error::TransportError;
use crate::transport::failure::{FailureInjector, RandomFailure};
use crate::transport::latency::{LatencyProfile, LatencySampler};
use crate::types::request::{HttpMethod, Request, RequestConfig};
use crate::types::response::Response;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Offset applied to the configured seed for the failure stream so that
/// delay and failure draws are not correlated.
const FAILURE_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stand-in for a network client.
///
/// Every call sleeps for a delay sampled from the latency profile, then asks
/// the failure injector whether to fail. Successful calls answer with:
///
/// - `GET`: the dispatch table payload for the path, `200 OK`
/// - `POST`: the body plus `id` and `createdAt`, `201 Created`
/// - `PUT`: the body plus `updatedAt`, `200 OK`
/// - `DELETE`: `{"message": "Deleted successfully"}`, `200 OK`
///
/// Calls share no mutable state beyond the random sources, so any number of
/// them may run concurrently.
#[derive(Debug)]
pub struct MockHttpClient {
    latency: LatencySampler,
    failure: Arc<dyn FailureInjector>,
    clock: Arc<dyn Clock>,
    dispatch: DispatchTable,
}

impl MockHttpClient {
    /// Default latency, 5% random failures and the built-in fixtures.
    pub fn new() -> Self {
        Self {
            latency: LatencySampler::default(),
            failure: Arc::new(RandomFailure::default()),
            clock: Arc::new(SystemClock),
            dispatch: DispatchTable::builtin(),
        }
    }

    /// Build a client from a validated configuration, loading fixture
    /// override files ahead of the built-in fixtures.
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let profile = config.latency_profile();
        let (latency, failure) = match config.seed {
            Some(seed) => (
                LatencySampler::seeded(profile, seed),
                RandomFailure::seeded(config.error_rate, seed ^ FAILURE_SEED_SALT),
            ),
            None => (
                LatencySampler::new(profile),
                RandomFailure::new(config.error_rate),
            ),
        };

        let mut dispatch = DispatchTable::builtin();
        let mut overrides = Vec::new();
        for pattern in &config.fixtures {
            overrides.extend(load_overrides(pattern)?);
        }
        debug!(count = overrides.len(), "fixture overrides loaded");
        dispatch.prepend(overrides);

        Ok(Self {
            latency,
            failure: Arc::new(failure),
            clock: Arc::new(SystemClock),
            dispatch,
        })
    }

    pub fn with_latency(mut self, profile: LatencyProfile) -> Self {
        self.latency = LatencySampler::new(profile);
        self
    }

    pub fn with_seeded_latency(mut self, profile: LatencyProfile, seed: u64) -> Self {
        self.latency = LatencySampler::seeded(profile, seed);
        self
    }

    pub fn with_failure_injector<F: FailureInjector + 'static>(mut self, injector: F) -> Self {
        self.failure = Arc::new(injector);
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_dispatch_table(mut self, dispatch: DispatchTable) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        self.latency.profile()
    }

    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.dispatch
    }

    pub async fn get(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> Result<Response, TransportError> {
        self.send(Request::new(HttpMethod::Get, path).with_config(config))
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Value,
        config: Option<RequestConfig>,
    ) -> Result<Response, TransportError> {
        self.send(
            Request::new(HttpMethod::Post, path)
                .with_config(config)
                .with_body(body),
        )
        .await
    }

    pub async fn put(
        &self,
        path: &str,
        body: Value,
        config: Option<RequestConfig>,
    ) -> Result<Response, TransportError> {
        self.send(
            Request::new(HttpMethod::Put, path)
                .with_config(config)
                .with_body(body),
        )
        .await
    }

    pub async fn delete(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> Result<Response, TransportError> {
        self.send(Request::new(HttpMethod::Delete, path).with_config(config))
            .await
    }

    /// Run one simulated request to completion.
    ///
    /// Resolves exactly once, after the sampled delay, with either a
    /// response or a [`TransportError`].
    pub async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let delay = self.latency.wait().await;
        debug!(
            method = %request.method,
            path = %request.path,
            delay_ms = delay.as_millis() as u64,
            "simulated request"
        );

        if request.path.is_empty() {
            return Err(TransportError::empty_path());
        }

        if self.failure.should_fail(&request) {
            warn!(method = %request.method, path = %request.path, "injected request failure");
            return Err(TransportError::failed(request.method, &request.path));
        }

        Ok(self.respond(&request))
    }

    fn respond(&self, request: &Request) -> Response {
        match request.method {
            HttpMethod::Get => {
                let params = request.effective_params();
                Response::ok(self.dispatch.resolve(request.route_path(), params.as_ref()))
            }
            HttpMethod::Post => {
                let now = self.clock.now();
                let mut data = body_fields(request.body.as_ref());
                data.insert("id".to_string(), Value::String(mock_id("mock", now)));
                data.insert("createdAt".to_string(), Value::String(iso_timestamp(now)));
                Response::created(Value::Object(data))
            }
            HttpMethod::Put => {
                let now = self.clock.now();
                let mut data = body_fields(request.body.as_ref());
                data.insert("updatedAt".to_string(), Value::String(iso_timestamp(now)));
                Response::ok(Value::Object(data))
            }
            HttpMethod::Delete => Response::ok(json!({ "message": "Deleted successfully" })),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level fields of a JSON object body; anything else contributes none.
fn body_fields(body: Option<&Value>) -> Map<String, Value> {
    match body {
        Some(Value::Object(fields)) => fields.clone(),
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::clock::FixedClock;
    use crate::transport::failure::{AlwaysFail, NeverFail};
    use chrono::DateTime;
    use rstest::rstest;
    use std::time::Duration;
    use tokio::time::Instant;

    const NOW_MILLIS: i64 = 1_705_311_000_123;

    fn reliable_client() -> MockHttpClient {
        MockHttpClient::new()
            .with_seeded_latency(LatencyProfile::default(), 17)
            .with_failure_injector(NeverFail)
            .with_clock(FixedClock::from_millis(NOW_MILLIS))
    }

    fn is_mock_id(id: &str) -> bool {
        id.strip_prefix("mock-")
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_classes() {
        let client = reliable_client();
        let response = client.get("/classes", None).await.expect("Should succeed");
        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        let classes = response.data.as_array().expect("classes should be an array");
        assert_eq!(classes.len(), 10);
        assert_eq!(classes[0]["id"], "class-1");
        assert_eq!(classes[9]["id"], "class-10");
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_unknown_path_is_empty_list() {
        let client = reliable_client();
        let response = client.get("/unknown/path", None).await.expect("Should succeed");
        assert_eq!(response.data, json!([]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_expense_heads() {
        let client = reliable_client();
        let response = client
            .get("/finance/expense-heads", None)
            .await
            .expect("Should succeed");
        assert_eq!(response.data.as_array().map(Vec::len), Some(3));
        assert_eq!(
            response.data[0],
            json!({
                "id": 1,
                "name": "Office Supplies",
                "description": "Stationery and office materials"
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_is_idempotent() {
        let client = reliable_client();
        for path in ["/classes", "/communication/logs", "/users/teacher", "/nothing"] {
            let first = client.get(path, None).await.expect("Should succeed");
            let second = client.get(path, None).await.expect("Should succeed");
            assert_eq!(first, second, "payload for {path} changed between calls");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_merges_body() {
        let client = MockHttpClient::new()
            .with_failure_injector(NeverFail)
            .with_latency(LatencyProfile::default());
        let response = client
            .post("/complains", json!({"title": "Noise"}), None)
            .await
            .expect("Should succeed");

        assert_eq!(response.status, 201);
        assert_eq!(response.status_text, "Created");
        assert_eq!(response.data["title"], "Noise");
        let id = response.data["id"].as_str().expect("id should be a string");
        assert!(is_mock_id(id), "unexpected id {id}");
        let created_at = response.data["createdAt"]
            .as_str()
            .expect("createdAt should be a string");
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_with_fixed_clock() {
        let client = reliable_client();
        let response = client
            .post(
                "/finance/expenses",
                json!({"name": "Chalk", "amount": 12.5, "id": "client-side"}),
                None,
            )
            .await
            .expect("Should succeed");
        assert_eq!(
            response.data,
            json!({
                "name": "Chalk",
                "amount": 12.5,
                "id": "mock-1705311000123",
                "createdAt": "2024-01-15T09:30:00.123Z"
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_posts_in_same_millisecond_share_id() {
        let client = reliable_client();
        let a = client.post("/a", json!({}), None).await.expect("Should succeed");
        let b = client.post("/b", json!({}), None).await.expect("Should succeed");
        assert_eq!(a.data["id"], b.data["id"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_adds_updated_at_only() {
        let client = reliable_client();
        let response = client
            .put("/finance/incomes/1", json!({"amount": 10}), None)
            .await
            .expect("Should succeed");
        assert_eq!(response.status, 200);
        assert_eq!(
            response.data,
            json!({"amount": 10, "updatedAt": "2024-01-15T09:30:00.123Z"})
        );
        assert!(response.data.get("id").is_none());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!([1, 2]))]
    #[case(json!("text"))]
    #[tokio::test(start_paused = true)]
    async fn test_non_object_bodies_contribute_nothing(#[case] body: Value) {
        let client = reliable_client();
        let response = client.put("/x", body, None).await.expect("Should succeed");
        assert_eq!(
            response.data,
            json!({"updatedAt": "2024-01-15T09:30:00.123Z"})
        );
    }

    #[rstest]
    #[case("/classes/1")]
    #[case("/unknown")]
    #[case("/finance/expenses/1")]
    #[tokio::test(start_paused = true)]
    async fn test_delete_message_regardless_of_path(#[case] path: &str) {
        let client = reliable_client();
        let response = client.delete(path, None).await.expect("Should succeed");
        assert_eq!(response.status, 200);
        assert_eq!(response.data, json!({"message": "Deleted successfully"}));
    }

    #[rstest]
    #[case(HttpMethod::Get, "Failed to GET /classes")]
    #[case(HttpMethod::Post, "Failed to POST /classes")]
    #[case(HttpMethod::Put, "Failed to PUT /classes")]
    #[case(HttpMethod::Delete, "Failed to DELETE /classes")]
    #[tokio::test(start_paused = true)]
    async fn test_injected_failure(#[case] method: HttpMethod, #[case] message: &str) {
        let client = reliable_client().with_failure_injector(AlwaysFail);
        let request = Request::new(method, "/classes").with_body(json!({}));
        let error = client.send(request).await.unwrap_err();
        assert_eq!(error.status, 500);
        assert_eq!(error.message, message);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_path_rejected() {
        let client = reliable_client();
        let error = client.get("", None).await.unwrap_err();
        assert_eq!(error, TransportError::empty_path());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_within_bounds() {
        let client = MockHttpClient::new()
            .with_seeded_latency(LatencyProfile::default(), 99)
            .with_failure_injector(NeverFail);
        for _ in 0..50 {
            let start = Instant::now();
            let _ = client.get("/classes", None).await;
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_millis(500), "too fast: {elapsed:?}");
            assert!(elapsed < Duration::from_millis(1500), "too slow: {elapsed:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_also_wait() {
        let client = MockHttpClient::new()
            .with_latency(LatencyProfile::fixed(Duration::from_millis(750)))
            .with_failure_injector(AlwaysFail);
        let start = Instant::now();
        assert!(client.delete("/classes/1", None).await.is_err());
        assert_eq!(start.elapsed(), Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_calls_resolve_independently() {
        let client = Arc::new(reliable_client());
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let client = Arc::clone(&client);
                tokio::spawn(async move { client.get(&format!("/users/kind{i}"), None).await })
            })
            .collect();

        let start = Instant::now();
        for (i, handle) in handles.into_iter().enumerate() {
            let response = handle.await.expect("task should not panic").expect("Should succeed");
            assert_eq!(response.data[0]["type"], format!("kind{i}"));
        }
        // All delays overlap rather than queue up.
        assert!(start.elapsed() < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_random_failure_rate() {
        let config = SimulatorConfig {
            latency: crate::config::simulator::LatencyConfig { min_ms: 0, max_ms: 0 },
            seed: Some(123),
            ..SimulatorConfig::default()
        };
        let client = MockHttpClient::from_config(&config).expect("Should build client");
        let mut failures = 0;
        let total = 10_000;
        for _ in 0..total {
            if client.get("/classes", None).await.is_err() {
                failures += 1;
            }
        }
        let rate = failures as f64 / total as f64;
        assert!((rate - 0.05).abs() < 0.01, "observed failure rate {rate}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_params_reach_factory() {
        use crate::fixtures::DispatchRule;
        use crate::matching::PathMatcher;

        let mut table = DispatchTable::empty();
        table.push(DispatchRule::new(
            "echo",
            PathMatcher::contains("/echo"),
            |_, params| params.cloned().map(Value::Object).unwrap_or(Value::Null),
        ));
        let client = reliable_client().with_dispatch_table(table);
        let config = RequestConfig::default().param("page", 2);
        let response = client
            .get("/echo?sort=name", Some(config))
            .await
            .expect("Should succeed");
        assert_eq!(response.data, json!({"page": 2, "sort": "name"}));
    }

    #[rstest]
    fn test_from_config_rejects_invalid() {
        let config = SimulatorConfig {
            error_rate: 2.0,
            ..SimulatorConfig::default()
        };
        assert!(matches!(
            MockHttpClient::from_config(&config).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[rstest]
    fn test_from_config_missing_fixture_files_is_ok() {
        let config = SimulatorConfig {
            fixtures: vec!["/nonexistent-schoolmock-dir/*.yaml".to_string()],
            ..SimulatorConfig::default()
        };
        let client = MockHttpClient::from_config(&config).expect("Should build client");
        assert_eq!(client.dispatch_table().rules().len(), 11);
        assert_eq!(client.latency_profile(), LatencyProfile::default());
    }
}
