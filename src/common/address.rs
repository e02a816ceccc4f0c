// src/common/address.rs

use super::error::SensorError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit bus address of an SHT3x sensor.
///
/// The sensor answers on one of two addresses selected by its ADDR pin.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorAddr(u8);

impl SensorAddr {
    /// ADDR pin tied low. This is what SHT30 breakout boards ship with.
    pub const DEFAULT_ADDRESS: SensorAddr = SensorAddr(0x44);
    /// ADDR pin tied high.
    pub const ALTERNATE_ADDRESS: SensorAddr = SensorAddr(0x45);

    /// Creates a new `SensorAddr` if the value is one of the two addresses
    /// the sensor can be strapped to.
    pub fn new(address: u8) -> Result<Self, SensorError<()>> {
        if Self::is_valid_address(address) {
            Ok(SensorAddr(address))
        } else {
            Err(SensorError::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x44 | 0x45)
    }
}

impl Default for SensorAddr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for SensorAddr {
    type Error = SensorError<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SensorAddr> for u8 {
    fn from(value: SensorAddr) -> Self {
        value.0
    }
}

impl fmt::Display for SensorAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
