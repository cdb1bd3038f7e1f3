//! Clock and busy waiting on the embassy time driver

use embassy_time::{block_for, Duration, Instant};
use servomux_hal::{BusyWait, MicrosClock};

/// Microsecond clock backed by the RP2040 timer
///
/// The 64-bit tick count is truncated to 32 bits, which wraps after about
/// 71 minutes; the emitter only ever subtracts timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MicrosClock for EmbassyClock {
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}

impl BusyWait for EmbassyClock {
    fn busy_wait_us(&mut self, us: u32) {
        if us > 0 {
            block_for(Duration::from_micros(u64::from(us)));
        }
    }
}
