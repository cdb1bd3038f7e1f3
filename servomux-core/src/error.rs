//! Servo bank errors

use core::fmt;

/// Errors reported by slot table updates
///
/// Both are rejected before any mutation; the table is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// Width is nonzero and outside the safe servo range
    InvalidPulseWidth,
    /// Every slot is enabled and the pin holds none of them
    NoFreeSlot,
}

impl fmt::Display for ServoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServoError::InvalidPulseWidth => f.write_str("wrong pulse width"),
            ServoError::NoFreeSlot => f.write_str("no more servo slots"),
        }
    }
}
