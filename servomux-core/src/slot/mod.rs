//! Servo slots
//!
//! A fixed array of pin/pulse-width pairs. Width 0 marks a disabled slot;
//! disabled slots are clustered at the front and enabled slots follow in
//! ascending width order, which is the order the emitter wants them in.

pub mod table;

pub use table::SlotTable;

use servomux_hal::PinId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of concurrently driven servos
pub const CAPACITY: usize = 8;

/// Shortest accepted pulse (µs)
pub const MIN_PULSE_WIDTH_US: u16 = 100;

/// Longest accepted pulse (µs)
pub const MAX_PULSE_WIDTH_US: u16 = 3000;

/// Width value that disables a slot
pub const DISABLED: u16 = 0;

/// One servo output: a pin and its pulse width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Output pin
    pub pin: PinId,
    /// Pulse width in microseconds (0 = disabled)
    pub width_us: u16,
}

impl Slot {
    /// A disabled slot bound to pin 0
    pub const EMPTY: Slot = Slot {
        pin: 0,
        width_us: DISABLED,
    };

    /// Create a slot
    pub const fn new(pin: PinId, width_us: u16) -> Self {
        Self { pin, width_us }
    }

    /// Check if this slot produces pulses
    pub fn is_enabled(&self) -> bool {
        self.width_us != DISABLED
    }
}

/// Check if `width_us` may be stored in a slot
///
/// Accepts the disable sentinel and the range
/// [`MIN_PULSE_WIDTH_US`]..=[`MAX_PULSE_WIDTH_US`].
pub fn is_valid_width(width_us: u16) -> bool {
    width_us == DISABLED || (MIN_PULSE_WIDTH_US..=MAX_PULSE_WIDTH_US).contains(&width_us)
}
