//! Time subsystem.
//!
//! Two pieces, kept separate on purpose:
//! - `FrameClock` stamps each presented frame with a monotonic timestamp
//!   (owned by the runtime).
//! - `StepClock` converts those irregular frame timestamps into a count of
//!   fixed-duration simulation steps (owned by the application).
//!
//! Neither piece is coupled to the runtime, so both are unit-testable.

mod frame_clock;
mod step_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use step_clock::StepClock;
