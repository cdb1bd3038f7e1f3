//! Pulse configuration
//!
//! Tunables read by the emitter on every tick. Drift values are subtracted
//! from the computed end-of-pulse wait to cover the instructions between
//! taking a timestamp and toggling the pin.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default per-pulse drift compensation (µs)
pub const DEFAULT_DRIFT_PER_PULSE_US: i32 = 2;

/// Default extra compensation for the first pulse of the end pass (µs)
pub const DEFAULT_DRIFT_FIRST_PULSE_US: i32 = 3;

/// Emitter tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseConfig {
    /// Measure and return actual pulse durations each tick
    pub stats_enabled: bool,
    /// Subtracted from every computed end-of-pulse wait
    pub drift_per_pulse_us: i32,
    /// Subtracted once more from the first wait of the end pass
    pub drift_first_pulse_us: i32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            stats_enabled: false,
            drift_per_pulse_us: DEFAULT_DRIFT_PER_PULSE_US,
            drift_first_pulse_us: DEFAULT_DRIFT_FIRST_PULSE_US,
        }
    }
}

impl PulseConfig {
    /// Overwrite the fields set in `update`
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(stats_enabled) = update.stats_enabled {
            self.stats_enabled = stats_enabled;
        }
        if let Some(drift) = update.drift_per_pulse_us {
            self.drift_per_pulse_us = drift;
        }
        if let Some(drift) = update.drift_first_pulse_us {
            self.drift_first_pulse_us = drift;
        }
    }
}

/// Partial configuration change
///
/// `None` fields leave the current value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigUpdate {
    pub stats_enabled: Option<bool>,
    pub drift_per_pulse_us: Option<i32>,
    pub drift_first_pulse_us: Option<i32>,
}

impl ConfigUpdate {
    /// An update that changes nothing
    pub const fn new() -> Self {
        Self {
            stats_enabled: None,
            drift_per_pulse_us: None,
            drift_first_pulse_us: None,
        }
    }

    pub const fn stats(mut self, enabled: bool) -> Self {
        self.stats_enabled = Some(enabled);
        self
    }

    pub const fn drift_per_pulse(mut self, us: i32) -> Self {
        self.drift_per_pulse_us = Some(us);
        self
    }

    pub const fn drift_first_pulse(mut self, us: i32) -> Self {
        self.drift_first_pulse_us = Some(us);
        self
    }
}
