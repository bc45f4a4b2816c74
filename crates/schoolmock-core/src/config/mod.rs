//! Simulator configuration and config file parsing.

pub mod error;
pub mod parser;
pub mod simulator;

pub use error::ConfigError;
pub use simulator::{LatencyConfig, SimulatorConfig};
