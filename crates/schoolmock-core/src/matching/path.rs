//! Substring and segment matching for request paths.

/// Result of a successful path match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathMatch {
    /// Segment captured after the prefix of a [`PathMatcher::Segment`]
    pub segment: Option<String>,
}

/// Predicate over a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// Matches when the path contains the given substring anywhere
    Contains(String),
    /// Matches `<prefix>/<segment>` and captures the non-empty segment
    Segment(String),
}

impl PathMatcher {
    pub fn contains(needle: impl Into<String>) -> Self {
        PathMatcher::Contains(needle.into())
    }

    /// Build a segment matcher; a trailing `/` on `prefix` is optional.
    pub fn segment(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        PathMatcher::Segment(prefix.trim_end_matches('/').to_owned())
    }

    /// Match `path` (query string and fragment already stripped).
    pub fn matches(&self, path: &str) -> Option<PathMatch> {
        match self {
            PathMatcher::Contains(needle) => {
                path.contains(needle.as_str()).then(PathMatch::default)
            }
            PathMatcher::Segment(prefix) => {
                let needle = format!("{}/", prefix.trim_end_matches('/'));
                let start = path.find(&needle)? + needle.len();
                let segment = path[start..].split('/').next().unwrap_or("");
                if segment.is_empty() {
                    return None;
                }
                Some(PathMatch {
                    segment: Some(segment.to_owned()),
                })
            }
        }
    }
}
