//! Ordered path-pattern dispatch for GET payloads.

use crate::fixtures::{communication, finance, school};
use crate::matching::{PathMatch, PathMatcher};
use crate::types::request::Params;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds a payload from the path match and the request params.
pub type PayloadFactory = Arc<dyn Fn(&PathMatch, Option<&Params>) -> Value + Send + Sync>;

/// A matcher and the payload factory it selects.
#[derive(Clone)]
pub struct DispatchRule {
    /// Name used in logs
    pub name: String,
    pub matcher: PathMatcher,
    factory: PayloadFactory,
}

impl DispatchRule {
    pub fn new<F>(name: impl Into<String>, matcher: PathMatcher, factory: F) -> Self
    where
        F: Fn(&PathMatch, Option<&Params>) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher,
            factory: Arc::new(factory),
        }
    }

    /// Rule that always answers with a clone of `data`.
    pub fn fixed(name: impl Into<String>, matcher: PathMatcher, data: Value) -> Self {
        Self::new(name, matcher, move |_, _| data.clone())
    }

    /// Payload for `path` if this rule matches it.
    pub fn apply(&self, path: &str, params: Option<&Params>) -> Option<Value> {
        self.matcher
            .matches(path)
            .map(|matched| (self.factory)(&matched, params))
    }
}

impl fmt::Debug for DispatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchRule")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Rules evaluated in priority order; the first match wins.
///
/// A path no rule matches resolves to an empty array.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    rules: Vec<DispatchRule>,
}

impl DispatchTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Communication, school and finance fixtures in their fixed order.
    pub fn builtin() -> Self {
        let mut rules = communication::rules();
        rules.extend(school::rules());
        rules.extend(finance::rules());
        Self { rules }
    }

    pub fn rules(&self) -> &[DispatchRule] {
        &self.rules
    }

    /// Append a rule with the lowest priority.
    pub fn push(&mut self, rule: DispatchRule) {
        self.rules.push(rule);
    }

    /// Insert rules ahead of every existing rule, keeping their relative order.
    pub fn prepend(&mut self, rules: impl IntoIterator<Item = DispatchRule>) {
        let mut combined: Vec<DispatchRule> = rules.into_iter().collect();
        combined.append(&mut self.rules);
        self.rules = combined;
    }

    /// Resolve the payload for `path` (query string and fragment are ignored).
    pub fn resolve(&self, path: &str, params: Option<&Params>) -> Value {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        for rule in &self.rules {
            if let Some(payload) = rule.apply(path, params) {
                debug!(rule = %rule.name, path, "dispatch rule matched");
                return payload;
            }
        }
        debug!(path, "no dispatch rule matched");
        Value::Array(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("/unknown/path")]
    #[case("/")]
    #[case("/complains")]
    #[case("/communication/templates")]
    #[case("/users")]
    fn test_unmatched_paths_resolve_to_empty_array(#[case] path: &str) {
        assert_eq!(DispatchTable::builtin().resolve(path, None), json!([]));
    }

    #[rstest]
    fn test_empty_table() {
        assert_eq!(DispatchTable::empty().resolve("/classes", None), json!([]));
    }

    #[rstest]
    fn test_builtin_rule_order() {
        let table = DispatchTable::builtin();
        let names: Vec<&str> = table.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "communication-scheduled",
                "communication-notices",
                "communication-logs",
                "communication-templates",
                "communication-gateway-status",
                "classes",
                "users",
                "finance-expense-heads",
                "finance-income-heads",
                "finance-expenses",
                "finance-incomes",
            ]
        );
    }

    #[rstest]
    fn test_first_match_wins() {
        let table = DispatchTable::builtin();
        // Contains both `/classes` and `/users/`; classes is checked first.
        let data = table.resolve("/users/teacher/classes", None);
        assert_eq!(data.as_array().map(Vec::len), Some(10));
    }

    #[rstest]
    fn test_prepend_takes_priority() {
        let mut table = DispatchTable::builtin();
        table.prepend(vec![DispatchRule::fixed(
            "custom-classes",
            PathMatcher::contains("/classes"),
            json!([{"id": "class-x"}]),
        )]);
        assert_eq!(table.resolve("/classes", None), json!([{"id": "class-x"}]));
        assert_eq!(table.rules().len(), 12);
    }

    #[rstest]
    fn test_push_has_lowest_priority() {
        let mut table = DispatchTable::builtin();
        table.push(DispatchRule::fixed(
            "shadowed",
            PathMatcher::contains("/classes"),
            json!("never"),
        ));
        table.push(DispatchRule::fixed(
            "complains",
            PathMatcher::contains("/complains"),
            json!([{"id": 1}]),
        ));
        assert_ne!(table.resolve("/classes", None), json!("never"));
        assert_eq!(table.resolve("/complains", None), json!([{"id": 1}]));
    }

    #[rstest]
    fn test_factory_receives_params() {
        let mut table = DispatchTable::empty();
        table.push(DispatchRule::new(
            "echo",
            PathMatcher::contains("/echo"),
            |_, params| params.cloned().map(Value::Object).unwrap_or(Value::Null),
        ));
        let mut params = Params::new();
        params.insert("page".to_string(), json!(2));
        assert_eq!(table.resolve("/echo", Some(&params)), json!({"page": 2}));
        assert_eq!(table.resolve("/echo", None), Value::Null);
    }

    #[rstest]
    #[case("/reports?return=/classes")]
    #[case("/unknown?next=/classes")]
    #[case("/unknown#/classes")]
    fn test_route_matched_on_path_without_query_or_fragment(#[case] path: &str) {
        let table = DispatchTable::builtin();
        assert_eq!(table.resolve(path, None), json!([]));
    }

    #[rstest]
    fn test_query_string_does_not_change_matched_route() {
        let table = DispatchTable::builtin();
        assert_eq!(
            table.resolve("/classes?page=1", None),
            table.resolve("/classes", None)
        );
    }

    #[rstest]
    fn test_resolve_is_deterministic() {
        let table = DispatchTable::builtin();
        for path in ["/communication/scheduled", "/communication/logs", "/finance/incomes"] {
            assert_eq!(table.resolve(path, None), table.resolve(path, None));
        }
    }
}
