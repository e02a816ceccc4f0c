// src/lib.rs

#![cfg_attr(not(test), no_std)] // std only for the test harness

pub mod common;
pub mod node;
pub mod sensor;
pub mod signal;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types for convenience
pub use common::{SensorAddr, SensorError, SensorReading};
pub use node::{Node, NodeConfig};
pub use sensor::Sht3x;
pub use signal::{Event, SignalCode, SignalEncoder, StatusIndicator};
