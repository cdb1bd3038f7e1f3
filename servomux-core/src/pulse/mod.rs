//! Pulse emission
//!
//! Runs once per servo tick (nominally 20 ms). All enabled outputs go high
//! back to back, then go low in the same order, so one serial busy-wait
//! budget replaces a hardware timer per pin.

pub mod emitter;

#[cfg(test)]
pub(crate) mod sim;

pub use emitter::{emit, PulseSample, PulseStats, DELAY_SHIFT_US};
