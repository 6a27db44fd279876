//! Frame timing.
//!
//! One `FrameClock` drives the render loop; call `tick()` once per presented
//! frame to obtain the `FrameTime` used for camera movement.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
