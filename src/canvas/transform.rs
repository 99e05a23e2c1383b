use crate::coords::Vec2;

/// 2D affine transform: two basis vectors plus a translation.
///
/// A point maps as `t + p.x · x_axis + p.y · y_axis`. Mutations compose in
/// the order applied, each expressed in the local space of the current
/// transform — the same convention as an HTML canvas context, so
/// translate → rotate → translate sequences read identically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub x_axis: Vec2,
    pub y_axis: Vec2,
    pub t: Vec2,
}

impl Transform2 {
    pub const IDENTITY: Transform2 = Transform2 {
        x_axis: Vec2::new(1.0, 0.0),
        y_axis: Vec2::new(0.0, 1.0),
        t: Vec2::new(0.0, 0.0),
    };

    /// Translates by `d` in local space.
    pub fn translate(&mut self, d: Vec2) {
        self.t += self.x_axis * d.x + self.y_axis * d.y;
    }

    /// Rotates by `radians` in local space.
    ///
    /// With +Y pointing down, a positive angle turns clockwise on screen.
    pub fn rotate(&mut self, radians: f32) {
        let (sin, cos) = radians.sin_cos();
        let x_axis = self.x_axis * cos + self.y_axis * sin;
        let y_axis = self.x_axis * -sin + self.y_axis * cos;
        self.x_axis = x_axis;
        self.y_axis = y_axis;
    }

    /// Maps a point through the transform.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.t + self.x_axis * p.x + self.y_axis * p.y
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a - b).length() < 1e-4,
            "expected {:?} ≈ {:?}",
            a,
            b
        );
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Transform2::IDENTITY.apply(p), p);
    }

    #[test]
    fn translate_then_rotate_pivots_around_translation() {
        // Quarter turn after translating: the translation point is the pivot.
        let mut t = Transform2::IDENTITY;
        t.translate(Vec2::new(10.0, 20.0));
        t.rotate(FRAC_PI_2);

        assert_close(t.apply(Vec2::zero()), Vec2::new(10.0, 20.0));
        // Local +X lands on +Y (clockwise with Y down).
        assert_close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 21.0));
    }

    #[test]
    fn centered_pivot_compose_order() {
        // translate(position) → rotate → translate(−half-size): the rect
        // drawn from the local origin stays centered on `position`.
        let position = Vec2::new(100.0, 100.0);
        let size = Vec2::new(20.0, 40.0);

        let mut t = Transform2::IDENTITY;
        t.translate(position);
        t.rotate(1.3);
        t.translate(-(size * 0.5));

        let center = t.apply(size * 0.5);
        assert_close(center, position);
    }

    #[test]
    fn rotation_preserves_lengths() {
        let mut t = Transform2::IDENTITY;
        t.rotate(0.7);
        let p = t.apply(Vec2::new(3.0, 4.0));
        assert!((p.length() - 5.0).abs() < 1e-4);
    }
}
