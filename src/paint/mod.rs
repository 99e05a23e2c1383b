//! Color model shared between the simulation and the renderer.

mod color;

pub use color::Color;
