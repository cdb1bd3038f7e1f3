//! Board-agnostic core logic for the servo pulse multiplexer
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Slot table: pin/pulse-width pairs kept sorted by width
//! - Pulse emitter: the two-pass, staggered pulse train run once per tick
//! - Pulse configuration: statistics flag and drift compensation
//! - [`ServoBank`]: the owning facade the firmware ticks
//!
//! Hardware access goes through the traits in `servomux-hal`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bank;
pub mod command;
pub mod config;
pub mod error;
pub mod pulse;
pub mod slot;

pub use bank::ServoBank;
pub use command::ServoCommand;
pub use config::{ConfigUpdate, PulseConfig};
pub use error::ServoError;
pub use pulse::{PulseSample, PulseStats, DELAY_SHIFT_US};
pub use slot::{Slot, SlotTable, CAPACITY, MAX_PULSE_WIDTH_US, MIN_PULSE_WIDTH_US};
