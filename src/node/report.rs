// src/node/report.rs

use super::config::NodeConfig;
use crate::common::{error::ReportError, hal_traits::Transport, types::SensorReading};
use crate::signal::Event;
use arrayvec::ArrayString;
use core::fmt::Write;

/// Capacity of the request URL buffer.
pub const URL_CAPACITY: usize = 256;

/// The request URL, built without an allocator.
pub type RequestUrl = ArrayString<URL_CAPACITY>;

/// Substring a response body must contain to count as acknowledged.
const ACK_MARKER: &str = "OK";

/// How a report attempt ended. Exactly one per reported cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportOutcome {
    Unreachable,
    Rejected,
    Success,
}

impl ReportOutcome {
    pub const fn event(&self) -> Event {
        match self {
            ReportOutcome::Unreachable => Event::ServerUnreachable,
            ReportOutcome::Rejected => Event::ServerRejected,
            ReportOutcome::Success => Event::Success,
        }
    }
}

/// Builds the device-update URL:
/// `<base>/json.htm?type=command&param=udevice&idx=<idx>&nvalue=0&svalue=<t>;<h>;0`
pub fn compose_url(config: &NodeConfig, reading: &SensorReading) -> Result<RequestUrl, ReportError> {
    let mut url = RequestUrl::new();
    write!(
        url,
        "{}/json.htm?type=command&param=udevice&idx={}&nvalue=0&svalue={};{};0",
        config.server_url,
        config.device_idx,
        reading.temperature(),
        reading.humidity(),
    )
    .map_err(|_| ReportError::RequestTooLong)?;
    Ok(url)
}

/// Sends one request and checks the body for the acknowledgement marker.
/// The response is dropped, and with it closed, before returning.
pub fn send<T: Transport>(transport: &mut T, url: &str) -> Result<(), ReportError<T::Error>> {
    let response = transport.get(url).map_err(ReportError::Unreachable)?;
    if response.as_ref().contains(ACK_MARKER) {
        Ok(())
    } else {
        Err(ReportError::Rejected)
    }
}

/// Reports `reading` and classifies the result. A URL that cannot be built
/// counts as unreachable, same as a request that cannot be sent.
pub fn report<T: Transport>(transport: &mut T, config: &NodeConfig, reading: &SensorReading) -> ReportOutcome {
    let url = match compose_url(config, reading) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("{}", e);
            return ReportOutcome::Unreachable;
        }
    };

    match send(transport, &url) {
        Ok(()) => {
            log::debug!("server accepted {}", url.as_str());
            ReportOutcome::Success
        }
        Err(ReportError::Rejected) => {
            log::warn!("server rejected {}", url.as_str());
            ReportOutcome::Rejected
        }
        Err(e) => {
            log::warn!("{}", e);
            ReportOutcome::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Tenths;
    use crate::test_support::{MockNetError, MockTransport};

    const CONFIG: NodeConfig = NodeConfig::new("lab-net", "hunter2", "http://10.0.0.2:8080", 7);

    fn reading() -> SensorReading {
        SensorReading::new(Tenths::new(216), Tenths::new(380), true)
    }

    #[test]
    fn test_compose_url() {
        let url = compose_url(&CONFIG, &reading()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://10.0.0.2:8080/json.htm?type=command&param=udevice&idx=7&nvalue=0&svalue=21.6;38.0;0"
        );
    }

    #[test]
    fn test_compose_url_negative_temperature() {
        let cold = SensorReading::new(Tenths::new(-52), Tenths::new(915), true);
        let url = compose_url(&CONFIG, &cold).unwrap();
        assert!(url.ends_with("&svalue=-5.2;91.5;0"));
    }

    #[test]
    fn test_compose_url_too_long() {
        let base: &'static str = Box::leak("h".repeat(URL_CAPACITY).into_boxed_str());
        let config = NodeConfig::new("lab-net", "hunter2", base, 7);
        assert!(matches!(compose_url(&config, &reading()), Err(ReportError::RequestTooLong)));

        let mut transport = MockTransport::default();
        assert_eq!(report(&mut transport, &config, &reading()), ReportOutcome::Unreachable);
        assert!(transport.requests.is_empty());
    }

    #[test]
    fn test_classification() {
        let mut transport = MockTransport::replying(&[
            Ok("OK"),
            Ok("ERR"),
            Err(MockNetError),
            Ok("{\"status\" : \"OK\", \"title\" : \"Update Device\"}"),
            Ok(""),
        ]);
        assert_eq!(report(&mut transport, &CONFIG, &reading()), ReportOutcome::Success);
        assert_eq!(report(&mut transport, &CONFIG, &reading()), ReportOutcome::Rejected);
        assert_eq!(report(&mut transport, &CONFIG, &reading()), ReportOutcome::Unreachable);
        assert_eq!(report(&mut transport, &CONFIG, &reading()), ReportOutcome::Success);
        assert_eq!(report(&mut transport, &CONFIG, &reading()), ReportOutcome::Rejected);
        assert_eq!(transport.requests.len(), 5);
    }

    #[test]
    fn test_send_errors() {
        let mut transport = MockTransport::replying(&[Err(MockNetError), Ok("ERR")]);
        assert!(matches!(send(&mut transport, "u"), Err(ReportError::Unreachable(MockNetError))));
        assert!(matches!(send(&mut transport, "u"), Err(ReportError::Rejected)));
    }

    #[test]
    fn test_outcome_events() {
        assert_eq!(ReportOutcome::Unreachable.event(), Event::ServerUnreachable);
        assert_eq!(ReportOutcome::Rejected.event(), Event::ServerRejected);
        assert_eq!(ReportOutcome::Success.event(), Event::Success);
    }
}
