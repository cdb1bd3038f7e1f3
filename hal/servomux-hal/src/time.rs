//! Time sources and busy waiting

/// Monotonic microsecond clock
///
/// The counter wraps. Callers must only compare timestamps through
/// [`elapsed_us`] (or `wrapping_sub`), which stays correct as long as the
/// measured interval is shorter than the wrap period.
pub trait MicrosClock {
    /// Current timestamp in microseconds
    fn now_us(&self) -> u32;
}

/// Blocking delay
pub trait BusyWait {
    /// Spin for approximately `us` microseconds
    ///
    /// Must return immediately for `us == 0`.
    fn busy_wait_us(&mut self, us: u32);
}

/// Microseconds from `start` to `end` on a wrapping clock
#[inline]
pub fn elapsed_us(start: u32, end: u32) -> u32 {
    end.wrapping_sub(start)
}
