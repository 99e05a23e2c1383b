use crate::coords::{Rect, Viewport};
use crate::paint::Color;

use super::cmd::QuadCmd;
use super::transform::Transform2;

/// Immediate-mode 2D recording surface.
///
/// Viewport dimensions are supplied once at construction and never
/// re-queried; the surface does not track window resizes.
#[derive(Debug)]
pub struct Canvas {
    viewport: Viewport,
    fill: Color,
    transform: Transform2,
    saved: Vec<Transform2>,
    quads: Vec<QuadCmd>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        debug_assert!(viewport.is_valid());
        Self {
            viewport,
            fill: Color::BLACK,
            transform: Transform2::IDENTITY,
            saved: Vec::new(),
            quads: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The full-surface rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height)
    }

    /// Sets the fill color used by subsequent `fill_rect` calls.
    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    /// Fills `rect` under the current transform with the current fill color.
    pub fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let r = rect.normalized();
        self.quads.push(QuadCmd {
            origin: self.transform.apply(r.origin),
            x_axis: self.transform.x_axis * r.size.x,
            y_axis: self.transform.y_axis * r.size.y,
            color: self.fill,
        });
    }

    /// Clears a region of the surface.
    ///
    /// The surface is opaque, so "cleared" pixels resolve to opaque black.
    /// A full-viewport clear under the identity transform resets the recorded
    /// stream instead of painting over it; partial clears record a black quad.
    pub fn clear_rect(&mut self, rect: Rect) {
        if self.transform.is_identity() && rect.covers(self.viewport) {
            self.quads.clear();
            return;
        }

        let fill = self.fill;
        self.set_fill(Color::BLACK);
        self.fill_rect(rect);
        self.fill = fill;
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Pushes the current transform onto the save stack.
    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Restores the most recently saved transform.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `save`.
    pub fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "restore called without matching save");
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    pub fn translate(&mut self, d: crate::coords::Vec2) {
        self.transform.translate(d);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.transform.rotate(radians);
    }

    /// Recorded quads in paint order.
    pub fn quads(&self) -> &[QuadCmd] {
        &self.quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn canvas() -> Canvas {
        Canvas::new(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn fill_rect_uses_current_fill_color() {
        let mut c = canvas();
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        c.set_fill(red);
        c.fill_rect(Rect::new(10.0, 10.0, 5.0, 5.0));

        assert_eq!(c.quads().len(), 1);
        assert_eq!(c.quads()[0].color, red);
        assert_eq!(c.quads()[0].origin, Vec2::new(10.0, 10.0));
        assert_eq!(c.quads()[0].x_axis, Vec2::new(5.0, 0.0));
        assert_eq!(c.quads()[0].y_axis, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn empty_rect_records_nothing() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert!(c.quads().is_empty());
    }

    #[test]
    fn full_clear_resets_the_stream() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.fill_rect(Rect::new(20.0, 0.0, 10.0, 10.0));
        c.clear_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(c.quads().is_empty());
    }

    #[test]
    fn partial_clear_paints_black() {
        let mut c = canvas();
        c.set_fill(Color::from_srgb_u8(255, 255, 255, 255));
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.clear_rect(Rect::new(0.0, 0.0, 100.0, 100.0));

        assert_eq!(c.quads().len(), 2);
        assert_eq!(c.quads()[1].color, Color::BLACK);
        // The caller's fill color survives the clear.
        c.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(c.quads()[2].color, Color::from_srgb_u8(255, 255, 255, 255));
    }

    #[test]
    fn transformed_clear_does_not_reset() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.save();
        c.rotate(0.5);
        c.clear_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        c.restore();
        assert_eq!(c.quads().len(), 2);
    }

    #[test]
    fn save_restore_round_trips() {
        let mut c = canvas();
        c.save();
        c.translate(Vec2::new(50.0, 50.0));
        c.rotate(1.0);
        c.restore();

        c.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(c.quads()[0].origin, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn rotated_fill_records_rotated_axes() {
        let mut c = canvas();
        c.save();
        c.rotate(std::f32::consts::FRAC_PI_2);
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.restore();

        let q = c.quads()[0];
        // Quarter turn with Y down: +X maps to +Y.
        assert!((q.x_axis - Vec2::new(0.0, 10.0)).length() < 1e-3);
        assert!((q.y_axis - Vec2::new(-10.0, 0.0)).length() < 1e-3);
    }
}
