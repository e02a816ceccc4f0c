// src/signal/encoder.rs

use super::code::{Event, SignalCode};
use crate::common::timing;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Something that can show an [`Event`] to whoever is looking at the node.
///
/// The driver and the acquisition loop only depend on this trait, so a
/// board can route events somewhere other than a single light.
pub trait StatusIndicator {
    /// Shows `event`, blocking until it has been fully shown.
    fn signal<D: DelayNs>(&mut self, event: Event, delay: &mut D);
}

/// Drives a single on/off output through [`SignalCode`] patterns.
#[derive(Debug)]
pub struct SignalEncoder<P> {
    pin: P,
}

impl<P: OutputPin> SignalEncoder<P> {
    pub fn new(pin: P) -> Self {
        SignalEncoder { pin }
    }

    /// Plays `code` on the output. Blocks for `code.total_duration()`.
    pub fn emit<D: DelayNs>(&mut self, code: SignalCode, delay: &mut D) {
        for pulse in code.pulses() {
            self.set(true);
            timing::block_for(delay, pulse.on);
            self.set(false);
            if let Some(off) = pulse.off {
                timing::block_for(delay, off);
            }
        }
    }

    /// Releases the output pin.
    pub fn release(self) -> P {
        self.pin
    }

    fn set(&mut self, high: bool) {
        let result = if high { self.pin.set_high() } else { self.pin.set_low() };
        if let Err(e) = result {
            log::warn!("status output write failed: {:?}", e);
        }
    }
}

impl<P: OutputPin> StatusIndicator for SignalEncoder<P> {
    fn signal<D: DelayNs>(&mut self, event: Event, delay: &mut D) {
        log::debug!("signal {:?}", event);
        self.emit(event.code(), delay);
    }
}
