// src/test_support.rs

// Hand-rolled recording doubles shared by the unit tests. The I2C bus itself
// is mocked with embedded-hal-mock; these cover the delay, the status light
// and the two network collaborators.

use crate::common::hal_traits::{LinkProvider, Transport};
use crate::common::types::LinkStatus;
use crate::signal::{Event, StatusIndicator};
use core::convert::Infallible;
use core::time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One observable step on the shared timeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    High,
    Low,
    Wait(Duration),
}

type Timeline = Rc<RefCell<Vec<Step>>>;

// --- Delay ---

/// Records every requested delay instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    timeline: Timeline,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<Step> {
        self.timeline.borrow().clone()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.timeline
            .borrow()
            .iter()
            .filter_map(|step| match step {
                Step::Wait(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn total(&self) -> Duration {
        self.waits().iter().sum()
    }

    fn push(&mut self, duration: Duration) {
        self.timeline.borrow_mut().push(Step::Wait(duration));
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.push(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.push(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.push(Duration::from_millis(u64::from(ms)));
    }
}

// --- Status light ---

/// Output pin that writes its level changes into a delay's timeline.
#[derive(Debug)]
pub struct RecordingPin {
    timeline: Timeline,
}

impl RecordingPin {
    pub fn sharing(delay: &RecordingDelay) -> Self {
        RecordingPin { timeline: Rc::clone(&delay.timeline) }
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.timeline.borrow_mut().push(Step::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.timeline.borrow_mut().push(Step::High);
        Ok(())
    }
}

/// Indicator that only remembers which events were shown. It does not
/// block, so delay logs contain the driver's own waits only.
#[derive(Debug, Default)]
pub struct RecordingIndicator {
    pub events: Vec<Event>,
}

impl RecordingIndicator {
    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl StatusIndicator for RecordingIndicator {
    fn signal<D: DelayNs>(&mut self, event: Event, _delay: &mut D) {
        self.events.push(event);
    }
}

// --- Network collaborators ---

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockNetError;

/// Transport that answers from a script and records requested URLs.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub replies: VecDeque<Result<&'static str, MockNetError>>,
    pub requests: Vec<String>,
}

impl MockTransport {
    pub fn replying(replies: &[Result<&'static str, MockNetError>]) -> Self {
        MockTransport { replies: replies.iter().copied().collect(), requests: Vec::new() }
    }
}

impl Transport for MockTransport {
    type Error = MockNetError;
    type Response = &'static str;

    fn get(&mut self, url: &str) -> Result<Self::Response, Self::Error> {
        self.requests.push(url.to_owned());
        self.replies.pop_front().expect("unexpected transport request")
    }
}

/// Link provider that walks through a scripted status sequence and then
/// keeps repeating the last status.
#[derive(Debug)]
pub struct MockLink {
    pub connect_results: VecDeque<Result<(), MockNetError>>,
    pub statuses: VecDeque<LinkStatus>,
    pub last: LinkStatus,
    pub connects: Vec<(String, String)>,
    pub polls: usize,
}

impl MockLink {
    pub fn with_statuses(statuses: &[LinkStatus]) -> Self {
        MockLink {
            connect_results: VecDeque::new(),
            statuses: statuses.iter().copied().collect(),
            last: LinkStatus::Idle,
            connects: Vec::new(),
            polls: 0,
        }
    }
}

impl LinkProvider for MockLink {
    type Error = MockNetError;

    fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error> {
        self.connects.push((ssid.to_owned(), password.to_owned()));
        self.connect_results.pop_front().unwrap_or(Ok(()))
    }

    fn status(&mut self) -> LinkStatus {
        self.polls += 1;
        if let Some(next) = self.statuses.pop_front() {
            self.last = next;
        }
        self.last
    }
}
