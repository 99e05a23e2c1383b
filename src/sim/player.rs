use std::f32::consts::FRAC_PI_2;

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::input::{Key, KeyState};
use crate::paint::Color;

use super::config::SimConfig;

/// Drift speed derived from the orientation angle.
///
/// The mapping repeats every quarter turn: fold the angle into `[0, π/2)`,
/// normalize to `[0, 1)` and remap through a triangular wave so the speed is
/// 0 at quarter-turn boundaries and 1 at the midpoint between them.
pub fn drift_speed(angle: f32) -> f32 {
    let fract = angle.abs() % FRAC_PI_2;
    let normalized = fract / FRAC_PI_2;
    1.0 - ((normalized - 0.5) * 2.0).abs()
}

/// Per-step turn input, level-read by `step()`.
///
/// The flags are independent toggles, not mutually exclusive; both held at
/// once nets to zero rotation. A press+release pair landing between two steps
/// is lost — accepted behavior, matching the event/step decoupling.
#[derive(Debug, Default, Copy, Clone)]
struct TurnKeys {
    left: bool,
    right: bool,
}

/// The controllable shape: a rectangle that spins under arrow-key input and
/// drifts perpendicular to its forward axis.
///
/// `velocity` is a pure function of the current angle, fully recomputed on
/// every `render()`; it is never integrated, so it cannot drift as
/// independent state.
#[derive(Debug)]
pub struct Player {
    position: Vec2,
    angle: f32,
    rotation_speed: f32,
    keys: TurnKeys,
    velocity: Vec2,
    size: Vec2,
    fill: Color,
}

impl Player {
    pub fn new(position: Vec2, config: &SimConfig) -> Self {
        Self {
            position,
            angle: 0.0,
            rotation_speed: config.rotation_speed,
            keys: TurnKeys::default(),
            velocity: Vec2::zero(),
            size: config.player_size,
            fill: config.player_fill,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Orientation in radians; unbounded, never wrapped.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Records a turn-key edge. Unrecognized keys are ignored.
    ///
    /// Safe to call at arbitrary event time; the flags are read at the next
    /// `step()`, last writer wins.
    pub fn set_input(&mut self, key: Key, state: KeyState) {
        let pressed = state == KeyState::Pressed;
        match key {
            Key::ArrowLeft => self.keys.left = pressed,
            Key::ArrowRight => self.keys.right = pressed,
            _ => {}
        }
    }

    /// Drops both turn flags. Called on focus loss so keys don't stick.
    pub fn clear_input(&mut self) {
        self.keys = TurnKeys::default();
    }

    /// One fixed simulation step: integrates input into the angle.
    pub fn step(&mut self) {
        if self.keys.left {
            self.angle -= self.rotation_speed;
        }
        if self.keys.right {
            self.angle += self.rotation_speed;
        }
    }

    /// Draws the shape and applies the angle-derived drift.
    ///
    /// The compose order translate(position) → rotate(angle) →
    /// translate(−half-size) keeps the rotation pivot at the rect center.
    /// The drift subtracts the raw sine/cosine projection from the position
    /// (velocity is negated twice on purpose; the sign convention is part of
    /// the observable behavior).
    pub fn render(&mut self, canvas: &mut Canvas) {
        canvas.save();
        canvas.translate(self.position);
        canvas.rotate(self.angle);
        canvas.translate(-(self.size * 0.5));
        canvas.set_fill(self.fill);
        canvas.fill_rect(Rect::from_origin_size(Vec2::zero(), self.size));
        canvas.restore();

        let speed = drift_speed(self.angle);
        self.velocity = Vec2::new(-self.angle.sin() * speed, self.angle.cos() * speed);
        self.position += -self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn player() -> Player {
        Player::new(Vec2::new(400.0, 300.0), &SimConfig::default())
    }

    fn canvas() -> Canvas {
        Canvas::new(Viewport::new(800.0, 600.0))
    }

    fn press(p: &mut Player, key: Key) {
        p.set_input(key, KeyState::Pressed);
    }

    // ── drift speed ───────────────────────────────────────────────────────

    #[test]
    fn speed_is_zero_at_quarter_turn_boundaries() {
        assert_eq!(drift_speed(0.0), 0.0);
        for k in 1..8 {
            assert!(drift_speed(k as f32 * FRAC_PI_2).abs() < 1e-5);
        }
    }

    #[test]
    fn speed_peaks_at_midpoints() {
        assert_eq!(drift_speed(FRAC_PI_4), 1.0);
        assert!((drift_speed(FRAC_PI_2 + FRAC_PI_4) - 1.0).abs() < 1e-5);
        assert!((drift_speed(-FRAC_PI_4) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn speed_repeats_every_quarter_turn() {
        for angle in [0.1f32, 0.3, 0.7, 1.2] {
            let base = drift_speed(angle);
            for k in 1..6 {
                let shifted = drift_speed(angle + k as f32 * FRAC_PI_2);
                assert!(
                    (shifted - base).abs() < 1e-4,
                    "speed({angle} + {k}·π/2) = {shifted}, expected {base}"
                );
            }
        }
    }

    #[test]
    fn speed_stays_in_unit_range() {
        let mut angle = -10.0f32;
        while angle < 10.0 {
            let s = drift_speed(angle);
            assert!((0.0..=1.0).contains(&s));
            angle += 0.013;
        }
    }

    // ── step ──────────────────────────────────────────────────────────────

    #[test]
    fn right_turn_adds_rotation_speed() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        p.step();
        assert_eq!(p.angle(), 0.05);
    }

    #[test]
    fn left_turn_subtracts_rotation_speed() {
        let mut p = player();
        press(&mut p, Key::ArrowLeft);
        p.step();
        assert_eq!(p.angle(), -0.05);
    }

    #[test]
    fn both_turn_keys_cancel() {
        let mut p = player();
        press(&mut p, Key::ArrowLeft);
        press(&mut p, Key::ArrowRight);
        p.step();
        assert_eq!(p.angle(), 0.0);
    }

    #[test]
    fn angle_is_never_wrapped() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        for _ in 0..1000 {
            p.step();
        }
        assert!((p.angle() - 50.0).abs() < 1e-2);
    }

    #[test]
    fn release_stops_rotation() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        p.step();
        p.set_input(Key::ArrowRight, KeyState::Released);
        p.step();
        assert_eq!(p.angle(), 0.05);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let mut p = player();
        press(&mut p, Key::Escape);
        press(&mut p, Key::Unknown(42));
        p.step();
        assert_eq!(p.angle(), 0.0);
    }

    #[test]
    fn clear_input_drops_held_flags() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        p.clear_input();
        p.step();
        assert_eq!(p.angle(), 0.0);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_at_zero_angle_moves_nothing() {
        let mut p = player();
        let mut c = canvas();
        let before = p.position();
        p.render(&mut c);
        // speed(0) == 0 — the shape is drawn but does not drift.
        assert_eq!(p.position(), before);
        assert_eq!(p.velocity(), Vec2::zero());
        assert_eq!(c.quads().len(), 1);
    }

    #[test]
    fn velocity_is_idempotent_for_fixed_angle() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        for _ in 0..10 {
            p.step();
        }

        let mut c = canvas();
        let p0 = p.position();
        p.render(&mut c);
        let v1 = p.velocity();
        let p1 = p.position();
        p.render(&mut c);
        let v2 = p.velocity();
        let p2 = p.position();

        assert_eq!(v1, v2);
        // Deltas agree up to the float grid at the current position.
        assert!(((p1 - p0) - (p2 - p1)).length() < 1e-4);
    }

    #[test]
    fn drift_direction_matches_sign_convention() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        for _ in 0..10 {
            p.step();
        }
        let angle = p.angle();
        let speed = drift_speed(angle);

        let mut c = canvas();
        let before = p.position();
        p.render(&mut c);
        let delta = p.position() - before;

        // position += −velocity, with velocity = (−sin·speed, cos·speed).
        // Tolerance covers the float grid at the current position.
        assert!((delta.x - angle.sin() * speed).abs() < 1e-4);
        assert!((delta.y + angle.cos() * speed).abs() < 1e-4);
    }

    #[test]
    fn render_draws_centered_rotated_rect() {
        let mut p = player();
        press(&mut p, Key::ArrowRight);
        for _ in 0..7 {
            p.step();
        }
        let position = p.position();

        let mut c = canvas();
        p.render(&mut c);

        let q = c.quads()[0];
        let center = q.origin + (q.x_axis + q.y_axis) * 0.5;
        assert!((center - position).length() < 1e-3);
        assert_eq!(q.color, SimConfig::default().player_fill);
    }
}
