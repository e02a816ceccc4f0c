// src/node/mod.rs

// The acquisition loop. `Node` is the device context: it owns the driver,
// the status indicator, the delay, both network collaborators and the
// configuration. Nothing lives in globals.

pub mod config;
mod link;
pub mod report;
pub mod stop;

pub use config::{DegradedPolicy, NodeConfig};
pub use report::ReportOutcome;
pub use stop::{MaxCycles, Never, StopCondition};

use crate::common::{
    error::NodeError,
    hal_traits::{LinkProvider, Transport},
    timing,
};
use crate::sensor::Sht3x;
use crate::signal::StatusIndicator;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// What one acquisition cycle did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// The reading went to the server; the outcome was signaled.
    Reported(ReportOutcome),
    /// The reading failed its integrity check and was not sent.
    Suppressed,
}

#[derive(Debug)]
pub struct Node<I2C, S, D, L, T> {
    sensor: Sht3x<I2C>,
    indicator: S,
    delay: D,
    link: L,
    transport: T,
    config: NodeConfig,
}

impl<I2C, S, D, L, T> Node<I2C, S, D, L, T>
where
    I2C: I2c,
    S: StatusIndicator,
    D: DelayNs,
    L: LinkProvider,
    T: Transport,
{
    pub fn new(sensor: Sht3x<I2C>, indicator: S, delay: D, link: L, transport: T, config: NodeConfig) -> Self {
        Node {
            sensor,
            indicator,
            delay,
            link,
            transport,
            config,
        }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn sensor(&self) -> &Sht3x<I2C> {
        &self.sensor
    }

    /// Takes the node apart again.
    pub fn into_parts(self) -> (Sht3x<I2C>, S, D, L, T) {
        (self.sensor, self.indicator, self.delay, self.link, self.transport)
    }

    /// Startup sequence: reset the sensor, then bring the link up.
    pub fn start<C: StopCondition>(&mut self, stop: &mut C) -> Result<(), NodeError> {
        self.sensor.reset(&mut self.delay, &mut self.indicator);
        self.bring_up_link(stop)
    }

    /// One measure-report-signal pass, without the trailing pause.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        let reading = self.sensor.measure(&mut self.delay, &mut self.indicator);

        if !reading.integrity_ok() && self.config.degraded_policy == DegradedPolicy::Suppress {
            log::warn!("reading failed integrity check, not reported");
            return CycleOutcome::Suppressed;
        }

        let outcome = report::report(&mut self.transport, &self.config, &reading);
        self.indicator.signal(outcome.event(), &mut self.delay);
        CycleOutcome::Reported(outcome)
    }

    /// Steady state: cycle, pause, repeat until `stop` says otherwise.
    /// Returns the number of completed cycles.
    pub fn run<C: StopCondition>(&mut self, stop: &mut C) -> u32 {
        let mut cycles: u32 = 0;
        while !stop.should_stop() {
            let outcome = self.run_cycle();
            log::debug!("cycle {}: {:?}", cycles, outcome);
            cycles = cycles.wrapping_add(1);
            timing::block_for(&mut self.delay, self.config.cycle_interval);
        }
        cycles
    }
}
