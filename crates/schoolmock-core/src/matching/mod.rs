//! Request path and query string matching.

mod path;
mod query;

pub use path::{PathMatch, PathMatcher};
pub use query::parse_query_string;
