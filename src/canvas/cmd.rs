use crate::coords::Vec2;
use crate::paint::Color;

/// A filled parallelogram: a rectangle carried through an affine transform.
///
/// The renderer reconstructs the four corners as
/// `origin + u · x_axis + v · y_axis` for `u, v ∈ {0, 1}`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadCmd {
    pub origin: Vec2,
    pub x_axis: Vec2,
    pub y_axis: Vec2,
    pub color: Color,
}
