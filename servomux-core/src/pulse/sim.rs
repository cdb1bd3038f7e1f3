//! Simulated hardware for emitter tests
//!
//! Time only advances when the emitter busy-waits or writes a pin, which
//! makes pulse edges fully deterministic.

use core::cell::Cell;

use servomux_hal::{BusyWait, Level, MicrosClock, PinBank, PinId};

/// One recorded pin write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub pin: PinId,
    pub level: Level,
    pub at_us: u32,
}

pub(crate) struct SimDriver {
    now: u32,
    /// Time each pin write takes
    write_cost_us: u32,
    clock_reads: Cell<usize>,
    pub edges: Vec<Edge>,
    pub waits: Vec<u32>,
}

impl SimDriver {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now: u32) -> Self {
        Self {
            now,
            write_cost_us: 0,
            clock_reads: Cell::new(0),
            edges: Vec::new(),
            waits: Vec::new(),
        }
    }

    pub fn with_write_cost(mut self, us: u32) -> Self {
        self.write_cost_us = us;
        self
    }

    pub fn clock_reads(&self) -> usize {
        self.clock_reads.get()
    }

    /// Time `pin` spent high, from its rising to its falling edge
    pub fn high_time(&self, pin: PinId) -> Option<u32> {
        let rise = self
            .edges
            .iter()
            .find(|e| e.pin == pin && e.level == Level::High)?;
        let fall = self
            .edges
            .iter()
            .find(|e| e.pin == pin && e.level == Level::Low)?;
        Some(fall.at_us.wrapping_sub(rise.at_us))
    }
}

impl PinBank for SimDriver {
    fn write_pin(&mut self, pin: PinId, level: Level) {
        self.edges.push(Edge {
            pin,
            level,
            at_us: self.now,
        });
        self.now = self.now.wrapping_add(self.write_cost_us);
    }
}

impl MicrosClock for SimDriver {
    fn now_us(&self) -> u32 {
        self.clock_reads.set(self.clock_reads.get() + 1);
        self.now
    }
}

impl BusyWait for SimDriver {
    fn busy_wait_us(&mut self, us: u32) {
        self.waits.push(us);
        self.now = self.now.wrapping_add(us);
    }
}
