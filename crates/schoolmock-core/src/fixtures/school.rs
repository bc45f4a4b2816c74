//! Class and user fixtures.

use crate::fixtures::dispatch::DispatchRule;
use crate::matching::PathMatcher;
use serde_json::{json, Value};

const CLASS_COUNT: usize = 10;

pub fn rules() -> Vec<DispatchRule> {
    vec![
        DispatchRule::new("classes", PathMatcher::contains("/classes"), |_, _| {
            classes()
        }),
        DispatchRule::new("users", PathMatcher::segment("/users"), |matched, _| {
            user(matched.segment.as_deref().unwrap_or_default())
        }),
    ]
}

/// `class-1` through `class-10`, each with sections A to C.
pub fn classes() -> Value {
    let classes = (1..=CLASS_COUNT)
        .map(|n| {
            json!({
                "id": format!("class-{n}"),
                "name": format!("Class {n}"),
                "sections": ["A", "B", "C"]
            })
        })
        .collect();
    Value::Array(classes)
}

/// Single-element list with a user of the given kind.
pub fn user(kind: &str) -> Value {
    json!([
        {
            "id": format!("user-{kind}-1"),
            "name": format!("{kind} User"),
            "type": kind,
            "email": format!("{kind}@school.example")
        }
    ])
}
