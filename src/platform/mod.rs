//! Platform abstraction layer
//!
//! Handles the host-facing edges of the simulation:
//! - Time (monotonic clock sampling)
//! - Input (semantic commands, pointer drag/aim translation)

pub mod input;
pub mod time;

pub use input::{Grab, InputCommand, Pointer, screen_to_world};
pub use time::{Clock, ManualClock, MonotonicClock};
