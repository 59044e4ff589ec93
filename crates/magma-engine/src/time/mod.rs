//! Frame timing and pacing.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
