//! Core contracts between the runtime (platform loop) and the application.
//!
//! Keeps runtime internals out of application code and provides a consistent
//! per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
