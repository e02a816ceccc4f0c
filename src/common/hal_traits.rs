// src/common/hal_traits.rs

use super::types::LinkStatus;
use core::fmt::Debug;

// The bus, the delay and the status light come straight from embedded-hal 1.0
// (`i2c::I2c`, `delay::DelayNs`, `digital::OutputPin`). The two traits below
// cover collaborators embedded-hal has no abstraction for.

/// Abstraction for the wireless connectivity provider (association + DHCP).
///
/// The provider is polled; it never pushes status changes.
pub trait LinkProvider {
    /// Associated error type for a refused connect request.
    type Error: Debug;

    /// Starts associating with the given network. Returns once the request
    /// has been accepted, not once the link is up.
    fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error>;

    /// Returns the current link status.
    fn status(&mut self) -> LinkStatus;
}

/// Abstraction for the HTTP transport used to reach the monitoring server.
pub trait Transport {
    /// Associated error type for requests that produced no response.
    type Error: Debug;

    /// Response handle. Dropping it closes the response.
    type Response: AsRef<str>;

    /// Performs a blocking GET of `url` and returns the response body.
    fn get(&mut self, url: &str) -> Result<Self::Response, Self::Error>;
}
