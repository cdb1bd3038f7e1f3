//! GPIO pin abstractions
//!
//! Servo outputs are addressed by number rather than by owned pin objects,
//! because the slot table stores plain pin identifiers and reorders them.

/// Logical pin identifier (GPIO number on the target chip)
pub type PinId = u8;

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Bank of directly-written digital outputs
///
/// Implementations must make `write_pin` a single register write where the
/// hardware allows it. The caller masks interrupts around each call; the
/// implementation must not block or take locks. Writes to pins the bank does
/// not own are ignored.
pub trait PinBank {
    /// Drive `pin` to `level`
    fn write_pin(&mut self, pin: PinId, level: Level);
}
