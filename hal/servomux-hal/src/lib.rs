//! servomux Hardware Abstraction Layer
//!
//! This crate defines the hardware primitives the pulse emitter consumes.
//! Chip-specific HALs (currently RP2040) implement them, and host tests
//! implement them with simulated time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  servomux-firmware / host tests         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servomux-core (slot table, emitter)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servomux-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ servomux-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinBank`] - Direct writes to numbered output pins
//! - [`time::MicrosClock`] - Wrapping microsecond timestamps
//! - [`time::BusyWait`] - Blocking microsecond delays
//! - [`PulseDriver`] - Everything the emitter needs, in one bound

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{Level, PinBank, PinId};
pub use time::{BusyWait, MicrosClock};

/// Combined hardware access used by the pulse emitter
///
/// A single value provides pin writes, the clock and busy waiting, so the
/// simulated clock in tests can advance when the emitter waits.
pub trait PulseDriver: PinBank + MicrosClock + BusyWait {}

// Blanket implementation for types that implement all three traits
impl<T: PinBank + MicrosClock + BusyWait> PulseDriver for T {}
