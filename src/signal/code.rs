// src/signal/code.rs

use core::time::Duration;

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// A timed blink pattern.
///
/// Entries are read pairwise as (on, off). An odd trailing entry means
/// "on, then stop" with no final off-pause.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignalCode(&'static [Duration]);

/// One high phase and the optional low pause that follows it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pulse {
    pub on: Duration,
    pub off: Option<Duration>,
}

impl SignalCode {
    pub const fn new(steps: &'static [Duration]) -> Self {
        Self(steps)
    }

    pub const fn steps(&self) -> &'static [Duration] {
        self.0
    }

    /// Iterates the pattern as (on, optional off) pairs.
    pub fn pulses(&self) -> impl Iterator<Item = Pulse> + 'static {
        self.0.chunks(2).map(|pair| Pulse {
            on: pair[0],
            off: pair.get(1).copied(),
        })
    }

    /// How long emitting this code blocks.
    pub fn total_duration(&self) -> Duration {
        self.0.iter().sum()
    }
}

// Server codes start with a single 0.2 s flash, link codes with a 2 s flash,
// sensor codes with two 1 s flashes.

const SUCCESS: &[Duration] = &[ms(500)];

const SERVER_UNREACHABLE: &[Duration] = &[ms(200), ms(200), ms(200), ms(500), ms(1000)];
const SERVER_REJECTED: &[Duration] = &[ms(200), ms(200), ms(200), ms(500), ms(200)];

const LINK_ERROR: &[Duration] = &[ms(2000), ms(500), ms(200), ms(200)];
const LINK_WAITING: &[Duration] = &[ms(2000), ms(500), ms(2000)];
const LINK_UP: &[Duration] = &[ms(2000), ms(500), ms(500), ms(500), ms(500), ms(500)];

const SENSOR_WRITE_FAILURE: &[Duration] = &[ms(1000), ms(200), ms(1000), ms(500), ms(200), ms(200)];
const SENSOR_READ_FAILURE: &[Duration] = &[ms(1000), ms(200), ms(1000), ms(500), ms(200), ms(1000)];
const BAD_CHECKSUM: &[Duration] =
    &[ms(1000), ms(200), ms(1000), ms(500), ms(2000), ms(200), ms(200), ms(200)];

/// Every condition the node can report on its status light.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Reading recorded and acknowledged by the server.
    Success,
    /// Request could not be sent or got no response.
    ServerUnreachable,
    /// Server answered without acknowledging the update.
    ServerRejected,
    /// Link is in a failure state (idle, bad credentials, no AP, connect failed, unknown).
    LinkError,
    /// Link is associating.
    LinkWaiting,
    /// Address acquired.
    LinkUp,
    /// Command write to the sensor failed; also covers bus faults.
    SensorWriteFailure,
    /// Measurement frame could not be read.
    SensorReadFailure,
    /// Frame read, but a checksum did not match.
    BadChecksum,
}

impl Event {
    pub const fn code(&self) -> SignalCode {
        match self {
            Event::Success => SignalCode::new(SUCCESS),
            Event::ServerUnreachable => SignalCode::new(SERVER_UNREACHABLE),
            Event::ServerRejected => SignalCode::new(SERVER_REJECTED),
            Event::LinkError => SignalCode::new(LINK_ERROR),
            Event::LinkWaiting => SignalCode::new(LINK_WAITING),
            Event::LinkUp => SignalCode::new(LINK_UP),
            Event::SensorWriteFailure => SignalCode::new(SENSOR_WRITE_FAILURE),
            Event::SensorReadFailure => SignalCode::new(SENSOR_READ_FAILURE),
            Event::BadChecksum => SignalCode::new(BAD_CHECKSUM),
        }
    }
}
