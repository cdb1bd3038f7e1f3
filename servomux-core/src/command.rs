//! Servo bank commands
//!
//! Requests from other tasks are queued as commands and applied by the task
//! that owns the bank, between ticks.

use servomux_hal::PinId;

use crate::config::ConfigUpdate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A change to apply to a [`ServoBank`](crate::ServoBank)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServoCommand {
    /// Set a pin's pulse width (0 disables)
    SetWidth { pin: PinId, width_us: u16 },
    /// Stop pulsing a pin
    Disable { pin: PinId },
    /// Change emitter tunables
    Configure(ConfigUpdate),
    /// Disable every pin and restore default tunables
    Reset,
}
