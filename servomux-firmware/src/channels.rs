//! Inter-task communication channels
//!
//! The pulse task owns the servo bank; everything else talks to it through
//! these statics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use servomux_core::ServoCommand;

/// Channel capacity for servo commands
const SERVO_CHANNEL_SIZE: usize = 16;

/// Commands for the pulse task, applied between ticks
pub static SERVO_CMD: Channel<CriticalSectionRawMutex, ServoCommand, SERVO_CHANNEL_SIZE> =
    Channel::new();
