// src/common/timing.rs

use core::time::Duration;

// Datasheet minimums are small (1 ms after break, 1.5 ms after soft reset,
// 15 ms high-repeatability conversion). The values below leave generous
// margin for the slow 10 kHz bus the node runs on.

// === Sensor Command Timing ===

/// Settle time after the break command before the next command.
pub const BREAK_SETTLE: Duration = Duration::from_millis(10);
/// Settle time after a soft reset before the sensor accepts commands.
pub const SOFT_RESET_SETTLE: Duration = Duration::from_millis(10);
/// Wait between triggering a single-shot measurement and reading the frame.
pub const MEASUREMENT_SETTLE: Duration = Duration::from_millis(100);

// === Retry Timing ===

/// Backoff after a failed bus write before the command is retried.
pub const WRITE_RETRY_BACKOFF: Duration = Duration::from_secs(5);
/// Backoff after the connectivity provider refuses a connect request.
pub const CONNECT_RETRY_BACKOFF: Duration = Duration::from_secs(5);

// === Acquisition Loop ===

/// Pause between the end of one reporting cycle and the next measurement.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(5);

// === Bus ===

/// Recommended I2C clock. Low enough to tolerate long, unshielded sensor leads.
pub const BUS_FREQUENCY_HZ: u32 = 10_000;

/// Blocks for `duration` at millisecond resolution.
///
/// Every delay in this crate is a whole number of milliseconds.
#[inline]
pub fn block_for<D: embedded_hal::delay::DelayNs>(delay: &mut D, duration: Duration) {
    delay.delay_ms(duration.as_millis() as u32);
}
