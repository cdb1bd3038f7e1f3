//! RP2040-specific HAL for the servo pulse multiplexer
//!
//! This crate provides RP2040 implementations of the `servomux-hal` traits:
//! - Servo output pins keyed by GPIO number
//! - Microsecond clock and busy waiting on the embassy time driver
//! - [`Rp2040PulseDriver`], the combined driver handed to the emitter

#![no_std]

pub mod driver;
pub mod gpio;
pub mod time;

pub use driver::Rp2040PulseDriver;
pub use gpio::{PinError, ServoOutputs, GPIO_COUNT};
pub use time::EmbassyClock;
