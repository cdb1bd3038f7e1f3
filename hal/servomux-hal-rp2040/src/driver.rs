//! Combined emitter driver

use servomux_hal::{BusyWait, Level, MicrosClock, PinBank, PinId};

use crate::gpio::ServoOutputs;
use crate::time::EmbassyClock;

/// Pins, clock and delay for one servo bank
pub struct Rp2040PulseDriver {
    outputs: ServoOutputs,
    clock: EmbassyClock,
}

impl Rp2040PulseDriver {
    /// Wrap registered servo outputs
    pub fn new(outputs: ServoOutputs) -> Self {
        Self {
            outputs,
            clock: EmbassyClock,
        }
    }

    /// Registered outputs
    pub fn outputs(&self) -> &ServoOutputs {
        &self.outputs
    }

    /// Mutable access, e.g. to force every output low
    pub fn outputs_mut(&mut self) -> &mut ServoOutputs {
        &mut self.outputs
    }
}

impl PinBank for Rp2040PulseDriver {
    #[inline]
    fn write_pin(&mut self, pin: PinId, level: Level) {
        self.outputs.write_pin(pin, level);
    }
}

impl MicrosClock for Rp2040PulseDriver {
    #[inline]
    fn now_us(&self) -> u32 {
        self.clock.now_us()
    }
}

impl BusyWait for Rp2040PulseDriver {
    #[inline]
    fn busy_wait_us(&mut self, us: u32) {
        self.clock.busy_wait_us(us);
    }
}
