// src/sensor/sync_driver/io_helpers.rs

use super::Sht3x; // Access Sht3x definition
use crate::common::{error::SensorError, frame::RawFrame, timing, Command};
use crate::signal::{Event, StatusIndicator};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Implementation block for bus I/O helpers
impl<I2C> Sht3x<I2C>
where
    I2C: I2c,
{
    /// Writes one 16-bit command to the sensor.
    pub(super) fn write_command(&mut self, command: Command) -> Result<(), SensorError<I2C::Error>> {
        self.i2c
            .write(self.address.as_u8(), &command.to_bytes())
            .map_err(SensorError::BusWrite)
    }

    /// Reads the 6-byte measurement frame.
    pub(super) fn read_frame(&mut self) -> Result<RawFrame, SensorError<I2C::Error>> {
        let mut buffer = [0u8; RawFrame::LEN];
        self.i2c
            .read(self.address.as_u8(), &mut buffer)
            .map_err(SensorError::BusRead)?;
        Ok(RawFrame::new(buffer))
    }

    /// Runs `attempt` until it succeeds. Each failure is shown as
    /// `SensorWriteFailure` and followed by the write backoff.
    ///
    /// There is no attempt limit: the node has nobody to report to, so it keeps
    /// trying and the repeating blink pattern tells the story.
    pub(super) fn retry_until_written<D, S, F>(&mut self, delay: &mut D, indicator: &mut S, mut attempt: F)
    where
        D: DelayNs,
        S: StatusIndicator,
        F: FnMut(&mut Self, &mut D) -> Result<(), SensorError<I2C::Error>>,
    {
        let mut failures: u32 = 0;
        loop {
            match attempt(self, delay) {
                Ok(()) => {
                    if failures > 0 {
                        log::info!("sensor write recovered after {} failed attempts", failures);
                    }
                    return;
                }
                Err(e) => {
                    failures = failures.saturating_add(1);
                    log::warn!("{} (attempt {}), retrying in {:?}", e, failures, timing::WRITE_RETRY_BACKOFF);
                    indicator.signal(Event::SensorWriteFailure, delay);
                    timing::block_for(delay, timing::WRITE_RETRY_BACKOFF);
                }
            }
        }
    }
}
