// src/common/crc.rs

use super::error::SensorError;
use crc::{Algorithm, Crc};

/// CRC-8 algorithm used by the SHT3x to protect each 16-bit data word.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1, written 0x131 with the implicit top bit)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789") - catalogued as CRC-8/NRSC-5
/// Residue: 0x00
pub const SHT3X_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

// Create a Crc instance for the sensor algorithm for reuse.
const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SHT3X_CRC);

/// Calculates the sensor CRC-8 over the given bytes.
///
/// On the wire the checksum only ever covers the two data bytes of one word.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Checks one transmitted word: two data bytes followed by their check byte.
///
/// Returns `true` when the calculated checksum equals the transmitted one.
#[inline]
pub fn validate(word: [u8; 3]) -> bool {
    calculate_crc8(&word[..2]) == word[2]
}

/// Same check as [`validate`], reported as a [`SensorError::ChecksumMismatch`].
pub fn verify_word<E>(word: [u8; 3]) -> Result<(), SensorError<E>>
where
    E: core::fmt::Debug,
{
    let calculated = calculate_crc8(&word[..2]);
    if calculated == word[2] {
        Ok(())
    } else {
        Err(SensorError::ChecksumMismatch { expected: word[2], calculated })
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    // Mock error type for verify function generic parameter
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct MockIoError;

    /// Bit-by-bit reference: XOR the byte in, then shift eight times feeding back 0x131.
    fn reference_crc(data: &[u8]) -> u8 {
        let mut crc: u16 = 0xFF;
        for byte in data {
            crc ^= u16::from(*byte);
            for _ in 0..8 {
                if crc & 0x80 != 0 {
                    crc = (crc << 1) ^ 0x131;
                } else {
                    crc <<= 1;
                }
            }
        }
        crc as u8
    }

    #[test]
    fn test_check_value() {
        assert_eq!(calculate_crc8(b"123456789"), 0xF7);
    }

    #[test]
    fn test_datasheet_example() {
        // Datasheet section 4.12: CRC of 0xBEEF is 0x92
        assert_eq!(calculate_crc8(&[0xBE, 0xEF]), 0x92);
        assert!(validate([0xBE, 0xEF, 0x92]));
    }

    #[test]
    fn test_known_words() {
        assert_eq!(calculate_crc8(&[0x00, 0x00]), 0x81);
        assert_eq!(calculate_crc8(&[0xFF, 0xFF]), 0xAC);
        assert_eq!(calculate_crc8(&[0x66, 0x66]), 0x93);
        assert_eq!(calculate_crc8(&[0x80, 0x00]), 0xA2);
    }

    #[test]
    fn test_matches_reference_for_sampled_words() {
        for msb in (0u16..=255).step_by(7) {
            for lsb in (0u16..=255).step_by(13) {
                let data = [msb as u8, lsb as u8];
                let crc = reference_crc(&data);
                assert_eq!(calculate_crc8(&data), crc, "mismatch for {:02x?}", data);
                assert!(validate([data[0], data[1], crc]));
            }
        }
    }

    #[test]
    fn test_single_bit_flip_fails() {
        let words = [[0xBE, 0xEF, 0x92], [0x66, 0x66, 0x93], [0x00, 0x00, 0x81], [0xFF, 0xFF, 0xAC]];
        for word in words {
            assert!(validate(word));
            for byte_idx in 0..3 {
                for bit in 0..8 {
                    let mut corrupted = word;
                    corrupted[byte_idx] ^= 1 << bit;
                    assert!(
                        !validate(corrupted),
                        "flip of bit {} in byte {} went undetected for {:02x?}",
                        bit, byte_idx, word
                    );
                }
            }
        }
    }

    #[test]
    fn test_verify_word_reports_both_values() {
        assert!(verify_word::<MockIoError>([0xBE, 0xEF, 0x92]).is_ok());
        let result = verify_word::<MockIoError>([0xBE, 0xEF, 0x93]);
        assert!(matches!(
            result,
            Err(SensorError::ChecksumMismatch { expected: 0x93, calculated: 0x92 })
        ));
    }
}
