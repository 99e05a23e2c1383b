//! Spindrift — a fixed-timestep 2D demo.
//!
//! A single rectangle spins under arrow-key control and drifts sideways at a
//! speed derived from its angle. The simulation runs at a fixed 60 Hz step
//! rate regardless of display refresh; rendering happens once per real frame.

pub mod app;
pub mod canvas;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod sim;
pub mod time;
pub mod window;
