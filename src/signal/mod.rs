// src/signal/mod.rs

// The status light is the node's only observability channel. Every terminal
// outcome of the driver and the acquisition loop maps to one blink pattern.

pub mod code;
pub mod encoder;

pub use code::{Event, Pulse, SignalCode};
pub use encoder::{SignalEncoder, StatusIndicator};
