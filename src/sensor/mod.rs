// src/sensor/mod.rs

// Blocking driver for the Sensirion SHT3x family (SHT30/31/35) on a two-wire bus.
// Bus writes are retried forever with a signaled backoff; reads are tried once
// and degrade to a flagged reading instead of failing.

pub mod sync_driver;

// --- Public Re-exports ---
pub use sync_driver::{DriverState, Sht3x};
