//! servomux - RC servo pulse multiplexer firmware
//!
//! Drives up to eight hobby servos from plain GPIO pins on an RP2040. One
//! task emits the 20 ms pulse trains; other tasks change pulse widths by
//! sending commands.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use servomux_core::{ConfigUpdate, CAPACITY};
use servomux_hal::PinId;
use servomux_hal_rp2040::{Rp2040PulseDriver, ServoOutputs};

use crate::tasks::{PulseFwConfig, SweepConfig};

mod channels;
mod tasks;

/// Pulse width servos are centred at on boot (µs)
const CENTER_US: u16 = 1500;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("servomux firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Servo header: GPIO 2-5
    let wiring: [(PinId, Peri<'static, AnyPin>); 4] = [
        (2, p.PIN_2.into()),
        (3, p.PIN_3.into()),
        (4, p.PIN_4.into()),
        (5, p.PIN_5.into()),
    ];

    let mut outputs = ServoOutputs::new();
    for (gpio, pin) in wiring {
        if let Err(e) = outputs.add(gpio, pin) {
            error!("Servo output gpio{} rejected: {}", gpio, e);
        }
    }

    let mut initial: Vec<(PinId, u16), CAPACITY> = Vec::new();
    let mut pins: Vec<PinId, CAPACITY> = Vec::new();
    for gpio in outputs.pins() {
        // Both vectors hold CAPACITY entries, as many as outputs can
        let _ = initial.push((gpio, CENTER_US));
        let _ = pins.push(gpio);
    }
    info!("{} servo outputs registered", pins.len());

    let pulse_config = PulseFwConfig {
        tunables: ConfigUpdate::new(),
        initial,
        ..Default::default()
    };
    let sweep_config = SweepConfig {
        pins,
        stats: true,
        ..Default::default()
    };

    spawner
        .spawn(tasks::pulse_task(Rp2040PulseDriver::new(outputs), pulse_config))
        .unwrap();
    spawner.spawn(tasks::sweep_task(sweep_config)).unwrap();

    info!("All tasks spawned");
}
