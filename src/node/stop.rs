// src/node/stop.rs

use core::sync::atomic::{AtomicBool, Ordering};

/// Asked before every loop iteration whether the node should stop.
///
/// On the device this is [`Never`]; tests bound the loop with [`MaxCycles`].
pub trait StopCondition {
    fn should_stop(&mut self) -> bool;
}

/// Runs forever.
#[derive(Debug, Copy, Clone, Default)]
pub struct Never;

impl StopCondition for Never {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Lets a fixed number of iterations through, then stops.
#[derive(Debug, Copy, Clone)]
pub struct MaxCycles {
    remaining: u32,
}

impl MaxCycles {
    pub const fn new(cycles: u32) -> Self {
        Self { remaining: cycles }
    }
}

impl StopCondition for MaxCycles {
    fn should_stop(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(left) => {
                self.remaining = left;
                false
            }
            None => true,
        }
    }
}

/// Stops once the flag is set, e.g. from an interrupt handler.
impl StopCondition for &AtomicBool {
    fn should_stop(&mut self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
