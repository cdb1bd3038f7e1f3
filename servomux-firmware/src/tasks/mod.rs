//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod pulse;
pub mod sweep;

pub use pulse::{pulse_task, PulseFwConfig};
pub use sweep::{sweep_task, SweepConfig};
