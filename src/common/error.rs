// src/common/error.rs

use super::types::LinkStatus;

/// Errors detected while talking to the sensor.
///
/// None of these leave the driver as a failure: write errors are retried,
/// read and checksum errors are folded into a degraded `SensorReading`.
#[derive(Debug, thiserror::Error)]
pub enum SensorError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Writing a command to the sensor failed.
    #[error("bus write failed: {0:?}")]
    BusWrite(E),

    /// Reading the 6-byte measurement frame failed.
    #[error("bus read failed: {0:?}")]
    BusRead(E),

    /// Received check byte does not match the calculated CRC-8.
    #[error("CRC mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    /// Address is not one the sensor can be strapped to.
    #[error("Invalid sensor address: {0:#04x}")]
    InvalidAddress(u8),
}

/// Errors from the connectivity provider while bringing the link up.
#[derive(Debug, thiserror::Error)]
pub enum LinkError<E = ()>
where
    E: core::fmt::Debug,
{
    /// The provider refused the `connect` request itself.
    #[error("connect request failed: {0:?}")]
    Connect(E),

    /// The provider reports a status that will not lead to an address.
    #[error("link down: {0:?}")]
    Status(LinkStatus),
}

/// Errors while reporting a reading to the monitoring server.
#[derive(Debug, thiserror::Error)]
pub enum ReportError<E = ()>
where
    E: core::fmt::Debug,
{
    /// The request could not be sent or no response arrived.
    #[error("server unreachable: {0:?}")]
    Unreachable(E),

    /// A response arrived but did not acknowledge the update.
    #[error("server rejected the update")]
    Rejected,

    /// The composed URL does not fit the request buffer.
    #[error("request URL exceeds buffer capacity")]
    RequestTooLong,
}

/// Errors that end a `Node` operation early.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// The stop condition fired before the operation completed.
    #[error("stopped before completion")]
    Stopped,
}
