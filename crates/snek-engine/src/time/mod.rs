//! Frame timing.
//!
//! The harness owns one `FrameClock` and ticks it once per drawn frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
