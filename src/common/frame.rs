// src/common/frame.rs

use super::crc;
use super::types::{SensorReading, Tenths};

/// Which of the two words in a measurement frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Word {
    Temperature,
    Humidity,
}

/// The 6 bytes returned by a single-shot measurement:
/// `[temp_msb, temp_lsb, temp_crc, hum_msb, hum_lsb, hum_crc]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame([u8; RawFrame::LEN]);

impl RawFrame {
    pub const LEN: usize = 6;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// The data bytes and check byte of one word.
    pub const fn word(&self, word: Word) -> [u8; 3] {
        let offset = match word {
            Word::Temperature => 0,
            Word::Humidity => 3,
        };
        [self.0[offset], self.0[offset + 1], self.0[offset + 2]]
    }

    /// The 16-bit raw value of one word.
    pub const fn raw(&self, word: Word) -> u16 {
        let [msb, lsb, _] = self.word(word);
        u16::from_be_bytes([msb, lsb])
    }

    /// Whether the check byte of `word` matches its data bytes.
    pub fn word_valid(&self, word: Word) -> bool {
        crc::validate(self.word(word))
    }

    /// Converts both words to physical units. Each word is validated on its
    /// own; `integrity_ok` is set only when both pass.
    pub fn decode(&self) -> SensorReading {
        let integrity_ok = self.word_valid(Word::Temperature) && self.word_valid(Word::Humidity);
        SensorReading::new(
            raw_to_celsius(self.raw(Word::Temperature)),
            raw_to_humidity(self.raw(Word::Humidity)),
            integrity_ok,
        )
    }
}

impl From<[u8; RawFrame::LEN]> for RawFrame {
    fn from(bytes: [u8; RawFrame::LEN]) -> Self {
        Self::new(bytes)
    }
}

const FULL_SCALE: u32 = 0xFFFF;

/// Rounds `raw * scale_tenths / 65535` to the nearest integer.
/// Never lands exactly on .5, since the doubled numerator is even and 65535 odd.
const fn scaled_tenths(raw: u16, scale_tenths: u32) -> u32 {
    (raw as u32 * scale_tenths * 2 + FULL_SCALE) / (FULL_SCALE * 2)
}

/// `T = -45 + 175 * raw / 65535`, rounded to 0.1 °C.
pub const fn raw_to_celsius(raw: u16) -> Tenths {
    Tenths::new(scaled_tenths(raw, 1750) as i16 - 450)
}

/// `RH = 100 * raw / 65535`, rounded to 0.1 %.
pub const fn raw_to_humidity(raw: u16) -> Tenths {
    Tenths::new(scaled_tenths(raw, 1000) as i16)
}
