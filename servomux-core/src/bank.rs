//! Servo bank
//!
//! Owns the slot table and the pulse configuration. The firmware keeps one
//! bank in the pulse task; tests create as many independent banks as they
//! like.
//!
//! ```ignore
//! let mut bank = ServoBank::new();
//! bank.upsert(2, 1500)?;
//!
//! // Every 20 ms:
//! if let Some(stats) = bank.emit_tick(&mut driver) {
//!     // measured pulse widths
//! }
//! ```

use servomux_hal::{PinId, PulseDriver};

use crate::command::ServoCommand;
use crate::config::{ConfigUpdate, PulseConfig};
use crate::error::ServoError;
use crate::pulse::{self, PulseStats};
use crate::slot::SlotTable;

/// Pulse multiplexer state
#[derive(Debug, Clone, Default)]
pub struct ServoBank {
    table: SlotTable,
    config: PulseConfig,
}

impl ServoBank {
    /// Create a bank with every slot disabled and default tunables
    pub fn new() -> Self {
        Self {
            table: SlotTable::new(),
            config: PulseConfig::default(),
        }
    }

    /// Set the pulse width for `pin` (0 disables it)
    ///
    /// # Errors
    /// See [`SlotTable::upsert`].
    pub fn upsert(&mut self, pin: PinId, width_us: u16) -> Result<(), ServoError> {
        self.table.upsert(pin, width_us)
    }

    /// Stop pulsing `pin`
    ///
    /// Returns `true` if the pin was enabled. Never reports
    /// [`ServoError::NoFreeSlot`], unlike `upsert(pin, 0)` on a full bank.
    pub fn disable(&mut self, pin: PinId) -> bool {
        self.table.disable(pin)
    }

    /// Pulse width configured for `pin`, or 0
    pub fn get(&self, pin: PinId) -> u16 {
        self.table.get(pin)
    }

    /// Emit one pulse on every enabled pin
    ///
    /// Blocks for roughly the longest configured width. Returns measured
    /// durations when statistics are enabled.
    pub fn emit_tick<D: PulseDriver>(&self, driver: &mut D) -> Option<PulseStats> {
        pulse::emit(self.table.enabled(), &self.config, driver)
    }

    /// Change emitter tunables; `None` fields are left as they are
    pub fn configure(&mut self, update: ConfigUpdate) {
        self.config.apply(&update);
    }

    /// Disable every pin and restore default tunables
    pub fn reset(&mut self) {
        self.table.clear();
        self.config = PulseConfig::default();
    }

    /// Apply a queued command
    ///
    /// # Errors
    /// Only [`ServoCommand::SetWidth`] can fail, as [`upsert`](Self::upsert).
    pub fn apply(&mut self, command: ServoCommand) -> Result<(), ServoError> {
        match command {
            ServoCommand::SetWidth { pin, width_us } => self.upsert(pin, width_us)?,
            ServoCommand::Disable { pin } => {
                self.disable(pin);
            }
            ServoCommand::Configure(update) => self.configure(update),
            ServoCommand::Reset => self.reset(),
        }
        Ok(())
    }

    /// Current tunables
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Read-only view of the slot table
    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    /// Number of pins currently pulsed
    pub fn enabled_count(&self) -> usize {
        self.table.enabled_count()
    }

    /// Check if a new pin would be rejected
    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Upper bound on one tick's busy time, excluding per-write overhead (µs)
    pub fn tick_budget_us(&self) -> u32 {
        let longest = self
            .table
            .enabled()
            .last()
            .map_or(0, |slot| u32::from(slot.width_us));
        longest + self.enabled_count() as u32 * pulse::DELAY_SHIFT_US
    }
}
