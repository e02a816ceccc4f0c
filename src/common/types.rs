// src/common/types.rs

use core::fmt;

// --- Fixed-point value with one fractional digit ---

/// A physical value stored as an integer count of tenths.
///
/// `Tenths(-450)` is -45.0, `Tenths(253)` is 25.3. `Display` always prints
/// exactly one fractional digit, which is the format the server expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tenths(i16);

impl Tenths {
    pub const ZERO: Tenths = Tenths(0);

    /// Creates a value from a raw count of tenths.
    pub const fn new(tenths: i16) -> Self {
        Self(tenths)
    }

    /// Returns the raw count of tenths.
    pub const fn as_tenths(&self) -> i16 {
        self.0
    }

    /// Returns the value as f32.
    pub fn as_f32(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{}", sign, magnitude / 10, magnitude % 10)
    }
}

// --- Measurement result ---

/// One measurement cycle's result.
///
/// `integrity_ok` is false when the bus read failed (both values are then zero)
/// or when either word failed its checksum (values are decoded but untrustworthy).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    temperature: Tenths,
    humidity: Tenths,
    integrity_ok: bool,
}

impl SensorReading {
    pub const fn new(temperature: Tenths, humidity: Tenths, integrity_ok: bool) -> Self {
        Self { temperature, humidity, integrity_ok }
    }

    /// The sentinel returned when no frame could be read.
    pub const fn degraded() -> Self {
        Self::new(Tenths::ZERO, Tenths::ZERO, false)
    }

    /// Temperature in degrees Celsius.
    pub const fn temperature(&self) -> Tenths {
        self.temperature
    }

    /// Relative humidity in percent.
    pub const fn humidity(&self) -> Tenths {
        self.humidity
    }

    pub const fn integrity_ok(&self) -> bool {
        self.integrity_ok
    }
}

// --- Connectivity ---

/// Status reported by the wireless connectivity provider.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Idle,
    WrongCredentials,
    NoAccessPoint,
    ConnectFailed,
    Connecting,
    GotAddress,
}

impl LinkStatus {
    /// Statuses that will not progress to an address without intervention.
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            LinkStatus::Idle
                | LinkStatus::WrongCredentials
                | LinkStatus::NoAccessPoint
                | LinkStatus::ConnectFailed
        )
    }
}
