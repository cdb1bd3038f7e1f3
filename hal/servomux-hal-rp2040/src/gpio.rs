//! Servo output pins
//!
//! Tracks which GPIO pins drive servos and writes them by number.

use embassy_rp::gpio::{AnyPin, Level as RpLevel, Output};
use embassy_rp::Peri;
use heapless::Vec;
use servomux_core::CAPACITY;
use servomux_hal::{Level, PinBank, PinId};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Error when registering a servo output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already registered
    AlreadyTaken,
    /// Every servo output is in use
    Full,
}

/// Check a GPIO number before registering it
pub fn check_pin(gpio: PinId, taken: impl IntoIterator<Item = PinId>) -> Result<(), PinError> {
    if gpio >= GPIO_COUNT {
        return Err(PinError::InvalidPin);
    }
    if taken.into_iter().any(|p| p == gpio) {
        return Err(PinError::AlreadyTaken);
    }
    Ok(())
}

/// GPIO outputs available to the emitter
///
/// Pins start low. Writes to numbers that were never registered are ignored.
pub struct ServoOutputs {
    outputs: Vec<(PinId, Output<'static>), CAPACITY>,
}

impl Default for ServoOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoOutputs {
    /// Create an empty output set
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
        }
    }

    /// Register `pin` as the output for GPIO number `gpio`
    ///
    /// The caller must pass the pin that actually is `gpio`; the number is
    /// what the slot table refers to.
    pub fn add(&mut self, gpio: PinId, pin: Peri<'static, AnyPin>) -> Result<(), PinError> {
        check_pin(gpio, self.outputs.iter().map(|(p, _)| *p))?;
        self.outputs
            .push((gpio, Output::new(pin, RpLevel::Low)))
            .map_err(|_| PinError::Full)
    }

    /// Check if `gpio` is registered
    pub fn contains(&self, gpio: PinId) -> bool {
        self.outputs.iter().any(|(p, _)| *p == gpio)
    }

    /// Registered GPIO numbers
    pub fn pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.outputs.iter().map(|(p, _)| *p)
    }

    /// Drive every output low
    pub fn all_low(&mut self) {
        for (_, output) in self.outputs.iter_mut() {
            output.set_low();
        }
    }
}

impl PinBank for ServoOutputs {
    fn write_pin(&mut self, pin: PinId, level: Level) {
        if let Some((_, output)) = self.outputs.iter_mut().find(|(p, _)| *p == pin) {
            output.set_level(if level.is_high() {
                RpLevel::High
            } else {
                RpLevel::Low
            });
        }
    }
}
