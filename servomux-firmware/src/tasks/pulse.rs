//! Servo pulse task
//!
//! Owns the servo bank and emits one pulse train per tick. Commands queued
//! by other tasks are applied between ticks, never during one.

use defmt::*;
use embassy_time::{Duration, Ticker};
use heapless::Vec;

use servomux_core::{ConfigUpdate, ServoBank, CAPACITY};
use servomux_hal::PinId;
use servomux_hal_rp2040::Rp2040PulseDriver;

use crate::channels::SERVO_CMD;

/// Servo refresh period in milliseconds
pub const TICK_INTERVAL_MS: u32 = 20;

/// Pulse task configuration
pub struct PulseFwConfig {
    /// Tick period in milliseconds
    pub tick_ms: u32,
    /// Tunables applied at startup
    pub tunables: ConfigUpdate,
    /// Widths set before the first tick (pin, µs)
    pub initial: Vec<(PinId, u16), CAPACITY>,
}

impl Default for PulseFwConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL_MS,
            tunables: ConfigUpdate::new(),
            initial: Vec::new(),
        }
    }
}

/// Pulse task - drains commands, then emits pulses, every tick
#[embassy_executor::task]
pub async fn pulse_task(mut driver: Rp2040PulseDriver, config: PulseFwConfig) {
    info!("Pulse task started");

    driver.outputs_mut().all_low();

    let mut bank = ServoBank::new();
    bank.configure(config.tunables);
    for &(pin, width_us) in config.initial.iter() {
        if !driver.outputs().contains(pin) {
            warn!("gpio{} has no servo output, pulses will be dropped", pin);
        }
        if let Err(e) = bank.upsert(pin, width_us) {
            warn!("Initial width {} us for gpio{} rejected: {}", width_us, pin, e);
        }
    }

    let period_us = config.tick_ms.saturating_mul(1000);
    check_budget(&bank, period_us);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.tick_ms)));

    loop {
        ticker.next().await;

        let mut changed = false;
        while let Ok(command) = SERVO_CMD.try_receive() {
            match bank.apply(command) {
                Ok(()) => changed = true,
                Err(e) => warn!("Servo command {} rejected: {}", command, e),
            }
        }
        if changed {
            debug!("{} servos enabled", bank.enabled_count());
            check_budget(&bank, period_us);
        }

        if let Some(stats) = bank.emit_tick(&mut driver) {
            for sample in stats.iter() {
                debug!("gpio{}: {} us", sample.pin, sample.duration_us);
            }
        }
    }
}

/// Warn when a tick could not finish inside the refresh period
fn check_budget(bank: &ServoBank, period_us: u32) {
    let budget_us = bank.tick_budget_us();
    if budget_us >= period_us {
        warn!(
            "Pulse train needs {} us, longer than the {} us tick",
            budget_us, period_us
        );
    }
}
