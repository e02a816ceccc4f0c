// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::SensorAddr;

// From command.rs
pub use command::{Command, Repeatability};

// From crc.rs
pub use self::crc::{calculate_crc8, validate, verify_word};

// From error.rs
pub use error::{LinkError, NodeError, ReportError, SensorError};

// From frame.rs
pub use frame::{RawFrame, Word};

// From hal_traits.rs
pub use hal_traits::{LinkProvider, Transport};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// From types.rs
pub use types::{LinkStatus, SensorReading, Tenths};
