//! Demo sweep task
//!
//! Walks every configured servo between two widths through the command
//! channel, with a phase offset per servo so the widths keep changing order
//! in the slot table.

use defmt::*;
use embassy_time::{Duration, Ticker};
use heapless::Vec;

use servomux_core::{ConfigUpdate, ServoCommand, CAPACITY};
use servomux_hal::PinId;

use crate::channels::SERVO_CMD;

/// Sweep configuration
pub struct SweepConfig {
    /// Servos to move
    pub pins: Vec<PinId, CAPACITY>,
    /// Lower end of the sweep (µs)
    pub min_us: u16,
    /// Upper end of the sweep (µs)
    pub max_us: u16,
    /// Width change per step (µs)
    pub step_us: u16,
    /// Time between steps in milliseconds
    pub step_ms: u32,
    /// Report measured pulse widths while sweeping
    pub stats: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            pins: Vec::new(),
            min_us: 1000,
            max_us: 2000,
            step_us: 20,
            step_ms: 100,
            stats: false,
        }
    }
}

/// Width for position `phase` on a triangle wave between `min_us` and `max_us`
fn triangle(phase: u32, min_us: u16, max_us: u16) -> u16 {
    let span = u32::from(max_us.saturating_sub(min_us));
    if span == 0 {
        return min_us;
    }
    let pos = phase % (2 * span);
    let offset = if pos < span { pos } else { 2 * span - pos };
    min_us + offset as u16
}

/// Sweep task
#[embassy_executor::task]
pub async fn sweep_task(config: SweepConfig) {
    info!(
        "Sweep task started: {} servos, {}..{} us",
        config.pins.len(),
        config.min_us,
        config.max_us
    );

    SERVO_CMD
        .send(ServoCommand::Configure(ConfigUpdate::new().stats(config.stats)))
        .await;

    let span = u32::from(config.max_us.saturating_sub(config.min_us));
    let spacing = span / config.pins.len().max(1) as u32;
    let mut phase: u32 = 0;
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.step_ms)));

    loop {
        ticker.next().await;

        for (i, &pin) in config.pins.iter().enumerate() {
            let width_us = triangle(phase + i as u32 * spacing, config.min_us, config.max_us);
            SERVO_CMD
                .send(ServoCommand::SetWidth { pin, width_us })
                .await;
        }

        phase = phase.wrapping_add(u32::from(config.step_us)) % (2 * span).max(1);
    }
}
