//! Canned GET payloads and the table that selects them by path.

pub mod communication;
pub mod dispatch;
pub mod finance;
pub mod overrides;
pub mod school;

pub use dispatch::{DispatchRule, DispatchTable, PayloadFactory};
pub use overrides::{load_overrides, FixtureOverride};
