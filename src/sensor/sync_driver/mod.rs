// src/sensor/sync_driver/mod.rs

mod io_helpers;

use crate::common::{
    address::SensorAddr,
    command::{Command, Repeatability},
    crc,
    frame::Word,
    timing,
    types::SensorReading,
};
use crate::signal::{Event, StatusIndicator};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Driver lifecycle, as observed from outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, no reset sequence sent yet.
    Uninitialized,
    /// Last operation completed cleanly.
    Ready,
    /// Measurement triggered, frame not read yet.
    Measuring,
    /// Last measurement failed to read or failed its checksum. Cleared by the
    /// next clean measurement.
    FaultedTransient,
}

/// Blocking SHT3x driver. Sole owner of the I2C bus.
#[derive(Debug)]
pub struct Sht3x<I2C> {
    i2c: I2C,
    address: SensorAddr,
    repeatability: Repeatability,
    clock_stretching: bool,
    state: DriverState,
}

impl<I2C> Sht3x<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: SensorAddr) -> Self {
        Sht3x {
            i2c,
            address,
            repeatability: Repeatability::High,
            clock_stretching: true,
            state: DriverState::Uninitialized,
        }
    }

    pub fn with_repeatability(mut self, repeatability: Repeatability) -> Self {
        self.repeatability = repeatability;
        self
    }

    pub fn with_clock_stretching(mut self, enabled: bool) -> Self {
        self.clock_stretching = enabled;
        self
    }

    pub fn address(&self) -> SensorAddr {
        self.address
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// The single-shot command issued by [`measure`](Self::measure).
    pub fn measure_command(&self) -> Command {
        Command::SingleShot {
            repeatability: self.repeatability,
            clock_stretching: self.clock_stretching,
        }
    }

    // --- Public Blocking Methods ---

    /// Puts the sensor in a known state: break, then soft reset.
    ///
    /// A failed write restarts the whole sequence after the write backoff.
    /// Never gives up, so this only returns once both commands went through.
    pub fn reset<D, S>(&mut self, delay: &mut D, indicator: &mut S)
    where
        D: DelayNs,
        S: StatusIndicator,
    {
        self.retry_until_written(delay, indicator, |sensor, delay| {
            sensor.write_command(Command::Break)?;
            timing::block_for(delay, timing::BREAK_SETTLE);
            sensor.write_command(Command::SoftReset)?;
            timing::block_for(delay, timing::SOFT_RESET_SETTLE);
            Ok(())
        });
        self.state = DriverState::Ready;
        log::debug!("sensor at {} reset", self.address);
    }

    /// Triggers one measurement and reads it back.
    ///
    /// The trigger write is retried like in [`reset`](Self::reset). The read is
    /// not: a failed read is signaled once and answered with
    /// [`SensorReading::degraded`]. A frame with a bad checksum is signaled once
    /// and still returned, with `integrity_ok` cleared.
    pub fn measure<D, S>(&mut self, delay: &mut D, indicator: &mut S) -> SensorReading
    where
        D: DelayNs,
        S: StatusIndicator,
    {
        if self.state == DriverState::Uninitialized {
            log::debug!("measuring before reset, sensor assumed idle");
        }

        let command = self.measure_command();
        self.retry_until_written(delay, indicator, |sensor, _| sensor.write_command(command));
        self.state = DriverState::Measuring;
        timing::block_for(delay, timing::MEASUREMENT_SETTLE);

        let frame = match self.read_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("{}", e);
                self.state = DriverState::FaultedTransient;
                indicator.signal(Event::SensorReadFailure, delay);
                return SensorReading::degraded();
            }
        };

        let reading = frame.decode();
        if reading.integrity_ok() {
            self.state = DriverState::Ready;
            log::info!("T={} °C RH={} %", reading.temperature(), reading.humidity());
        } else {
            for word in [Word::Temperature, Word::Humidity] {
                if let Err(e) = crc::verify_word::<I2C::Error>(frame.word(word)) {
                    log::warn!("{:?} word: {}", word, e);
                }
            }
            self.state = DriverState::FaultedTransient;
            indicator.signal(Event::BadChecksum, delay);
        }
        reading
    }
}
