//! SHT3x command definitions.
//!
//! Every command is a 16-bit code sent MSB first as a plain bus write.

use core::fmt;

/// Measurement repeatability of a single-shot acquisition.
///
/// Higher repeatability means a longer conversion and less noise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeatability {
    #[default]
    High,
    Medium,
    Low,
}

/// Represents a command understood by the sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Break (`0x3093`) - Stops periodic acquisition and returns the sensor to single-shot idle.
    Break,

    /// Soft Reset (`0x30A2`) - Reloads calibration data without a power cycle.
    SoftReset,

    /// Single Shot Measurement (`0x2Cxx` with clock stretching, `0x24xx` without).
    SingleShot { repeatability: Repeatability, clock_stretching: bool },
}

impl Command {
    /// The command the node issues every cycle: high repeatability, clock stretching enabled.
    pub const MEASURE_HIGH: Command = Command::SingleShot {
        repeatability: Repeatability::High,
        clock_stretching: true,
    };

    /// Returns the 16-bit command code.
    pub const fn code(&self) -> u16 {
        match self {
            Command::Break => 0x3093,
            Command::SoftReset => 0x30A2,
            Command::SingleShot { repeatability, clock_stretching: true } => match repeatability {
                Repeatability::High => 0x2C06,
                Repeatability::Medium => 0x2C0D,
                Repeatability::Low => 0x2C10,
            },
            Command::SingleShot { repeatability, clock_stretching: false } => match repeatability {
                Repeatability::High => 0x2400,
                Repeatability::Medium => 0x240B,
                Repeatability::Low => 0x2416,
            },
        }
    }

    /// Returns the two bytes written on the bus (MSB first).
    pub const fn to_bytes(&self) -> [u8; 2] {
        self.code().to_be_bytes()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.code())
    }
}
