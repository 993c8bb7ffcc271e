//! Time subsystem.
//!
//! Two independent notions of time live here:
//! - wall-clock instants ([`TimeSource`]) that decide what a clock face shows
//! - monotonic frame timing ([`FrameClock`]) that hosts use to pace redraws
//!
//! Instants are milliseconds since the Unix epoch as `i64`, so instants before
//! 1970 stay representable.

mod frame_clock;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualClock, SystemClock, TimeSource};
