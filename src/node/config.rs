//! Compiled-in node configuration.

use crate::common::timing;
use core::time::Duration;

/// What to do with a reading whose `integrity_ok` flag is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DegradedPolicy {
    /// Do not send it. The driver has already signaled the fault.
    #[default]
    Suppress,
    /// Send it like any other reading (a failed read goes out as 0.0/0.0).
    Report,
}

/// Everything the node needs to know at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeConfig {
    /// Wireless network name
    pub ssid: &'static str,
    /// Wireless network passphrase
    pub password: &'static str,
    /// Server base URL without trailing slash, e.g. `http://192.168.1.10:8080`
    pub server_url: &'static str,
    /// Server-side device index the readings are recorded against
    pub device_idx: u32,
    /// Pause between reporting cycles
    pub cycle_interval: Duration,
    /// Handling of readings that failed their integrity check
    pub degraded_policy: DegradedPolicy,
    /// Bus clock the board glue should configure
    pub bus_frequency_hz: u32,
}

impl NodeConfig {
    pub const fn new(
        ssid: &'static str,
        password: &'static str,
        server_url: &'static str,
        device_idx: u32,
    ) -> Self {
        Self {
            ssid,
            password,
            server_url,
            device_idx,
            cycle_interval: timing::CYCLE_INTERVAL,
            degraded_policy: DegradedPolicy::Suppress,
            bus_frequency_hz: timing::BUS_FREQUENCY_HZ,
        }
    }

    pub const fn with_cycle_interval(mut self, interval: Duration) -> Self {
        self.cycle_interval = interval;
        self
    }

    pub const fn with_degraded_policy(mut self, policy: DegradedPolicy) -> Self {
        self.degraded_policy = policy;
        self
    }

    pub const fn with_bus_frequency(mut self, hz: u32) -> Self {
        self.bus_frequency_hz = hz;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: NodeConfig = NodeConfig::new("lab-net", "hunter2", "http://10.0.0.2:8080", 7);

    #[test]
    fn test_defaults() {
        assert_eq!(CONFIG.cycle_interval, Duration::from_secs(5));
        assert_eq!(CONFIG.degraded_policy, DegradedPolicy::Suppress);
        assert_eq!(CONFIG.bus_frequency_hz, 10_000);
    }

    #[test]
    fn test_builders() {
        const TUNED: NodeConfig = CONFIG
            .with_cycle_interval(Duration::from_secs(60))
            .with_degraded_policy(DegradedPolicy::Report)
            .with_bus_frequency(100_000);
        assert_eq!(TUNED.cycle_interval, Duration::from_secs(60));
        assert_eq!(TUNED.degraded_policy, DegradedPolicy::Report);
        assert_eq!(TUNED.bus_frequency_hz, 100_000);
        assert_eq!(TUNED.device_idx, 7);
    }
}
