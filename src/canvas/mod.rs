//! Immediate-mode 2D drawing surface.
//!
//! `Canvas` records renderer-agnostic quad commands under an affine transform
//! stack, HTML-canvas style: set a fill color, push transforms, fill rects.
//! The recorded stream is consumed by `render::QuadRenderer` once per real
//! frame and is retained until the next full-surface clear, mirroring a
//! pixel-retaining surface — frames that run zero simulation steps simply
//! re-present the previous state.
//!
//! Recording is pure CPU work, so everything here is testable without a
//! window or GPU.

mod cmd;
mod surface;
mod transform;

pub use cmd::QuadCmd;
pub use surface::Canvas;
pub use transform::Transform2;
