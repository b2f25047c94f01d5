//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame
//! to obtain a `FrameTime` snapshot. Animations (the viewer's pulsing ring,
//! for instance) advance by `FrameTime::dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
