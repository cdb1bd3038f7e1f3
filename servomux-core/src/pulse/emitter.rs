//! Two-pass pulse emitter
//!
//! Start pass: every enabled pin goes high, `DELAY_SHIFT_US` apart, with a
//! timestamp taken right after each write. End pass: in the same (ascending
//! width) order, wait until each pin's width has elapsed since its own
//! timestamp and drive it low. Since widths ascend and starts are staggered
//! by a constant, every end-pass wait begins after the previous pin was
//! released, so a single loop turns each pin off at the right time.
//!
//! Total tick time is roughly the longest width plus
//! `enabled_count * DELAY_SHIFT_US`. Staying inside the tick period is the
//! caller's job; an overrun only shows up as late falling edges.

use heapless::Vec;
use servomux_hal::time::elapsed_us;
use servomux_hal::{Level, PinBank, PinId, PulseDriver};

use crate::config::PulseConfig;
use crate::slot::{Slot, CAPACITY};

/// Offset between consecutive rising edges (µs)
pub const DELAY_SHIFT_US: u32 = 10;

/// Measured pulse for one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseSample {
    pub pin: PinId,
    /// Time from the rising-edge timestamp to just after the falling edge
    pub duration_us: u32,
}

/// Measured pulses for one tick, ascending by configured width
pub type PulseStats = Vec<PulseSample, CAPACITY>;

/// Emit one pulse on every slot in `slots`
///
/// `slots` must be the enabled range of a sorted table. Returns the measured
/// durations when `config.stats_enabled` is set.
pub fn emit<D: PulseDriver>(
    slots: &[Slot],
    config: &PulseConfig,
    driver: &mut D,
) -> Option<PulseStats> {
    let mut started = [0u32; CAPACITY];

    for (slot, start) in slots.iter().zip(started.iter_mut()) {
        write_masked(driver, slot.pin, Level::High);
        *start = driver.now_us();
        driver.busy_wait_us(DELAY_SHIFT_US);
    }

    let mut stats = config.stats_enabled.then(PulseStats::new);
    let mut first_drift = config.drift_first_pulse_us;

    for (slot, &start) in slots.iter().zip(started.iter()) {
        let elapsed = elapsed_us(start, driver.now_us());
        let wait = remaining_us(slot.width_us, elapsed, config.drift_per_pulse_us, first_drift);
        first_drift = 0;

        driver.busy_wait_us(wait);
        write_masked(driver, slot.pin, Level::Low);

        if let Some(stats) = stats.as_mut() {
            let duration_us = elapsed_us(start, driver.now_us());
            // At most CAPACITY slots, so this never overflows
            let _ = stats.push(PulseSample {
                pin: slot.pin,
                duration_us,
            });
        }
    }

    stats
}

/// Wait still needed before the falling edge, clamped at zero
fn remaining_us(width_us: u16, elapsed_us: u32, drift_us: i32, first_drift_us: i32) -> u32 {
    let wait = i64::from(width_us)
        - i64::from(elapsed_us)
        - i64::from(drift_us)
        - i64::from(first_drift_us);
    wait.clamp(0, i64::from(u32::MAX)) as u32
}

/// Write a pin with interrupts masked
///
/// Keeps a higher-priority interrupt from landing between the timestamp and
/// the edge it describes.
fn write_masked<B: PinBank>(bank: &mut B, pin: PinId, level: Level) {
    critical_section::with(|_cs| bank.write_pin(pin, level));
}
