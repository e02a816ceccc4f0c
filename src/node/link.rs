// src/node/link.rs

use super::stop::StopCondition;
use super::Node;
use crate::common::{
    error::{LinkError, NodeError},
    hal_traits::{LinkProvider, Transport},
    timing,
    types::LinkStatus,
};
use crate::signal::{Event, StatusIndicator};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Implementation block for network bring-up
impl<I2C, S, D, L, T> Node<I2C, S, D, L, T>
where
    I2C: I2c,
    S: StatusIndicator,
    D: DelayNs,
    L: LinkProvider,
    T: Transport,
{
    /// Connects to the configured network and blocks until an address is acquired.
    ///
    /// Every poll shows the current status on the indicator, so the blink
    /// pattern itself paces the polling. `stop` is checked before each poll.
    pub fn bring_up_link<C: StopCondition>(&mut self, stop: &mut C) -> Result<(), NodeError> {
        loop {
            if stop.should_stop() {
                return Err(NodeError::Stopped);
            }
            match self.link.connect(self.config.ssid, self.config.password) {
                Ok(()) => break,
                Err(e) => {
                    log::warn!("{}", LinkError::Connect(e));
                    self.indicator.signal(Event::LinkError, &mut self.delay);
                    timing::block_for(&mut self.delay, timing::CONNECT_RETRY_BACKOFF);
                }
            }
        }
        log::info!("connecting to {}", self.config.ssid);

        // Wait out the states that need the provider to start over.
        loop {
            if stop.should_stop() {
                return Err(NodeError::Stopped);
            }
            let status = self.link.status();
            if !status.is_failure() {
                break;
            }
            log::debug!("{}", LinkError::<L::Error>::Status(status));
            self.indicator.signal(Event::LinkError, &mut self.delay);
        }

        loop {
            if stop.should_stop() {
                return Err(NodeError::Stopped);
            }
            match self.link.status() {
                LinkStatus::Connecting => {
                    self.indicator.signal(Event::LinkWaiting, &mut self.delay);
                }
                LinkStatus::GotAddress => {
                    log::info!("link up");
                    self.indicator.signal(Event::LinkUp, &mut self.delay);
                    return Ok(());
                }
                other => {
                    log::warn!("{}", LinkError::<L::Error>::Status(other));
                    self.indicator.signal(Event::LinkError, &mut self.delay);
                }
            }
        }
    }
}
