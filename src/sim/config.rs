use std::time::Duration;

use crate::coords::Vec2;
use crate::paint::Color;

/// Simulation constants, injected at construction so the sim core carries no
/// ambient globals and is testable without a window.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Logical step duration.
    pub fixed_interval: Duration,

    /// Per-step angular delta in radians.
    pub rotation_speed: f32,

    /// Player rectangle extent in logical pixels.
    pub player_size: Vec2,

    /// Player fill color.
    pub player_fill: Color,

    /// Surface background color, repainted every step.
    pub background: Color,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_interval: Duration::from_nanos(1_000_000_000 / 60),
            rotation_speed: 0.05,
            player_size: Vec2::new(20.0, 40.0),
            player_fill: Color::from_srgb_u8(0xF9, 0xF7, 0xF7, 0xFF),
            background: Color::from_srgb_u8(0x3F, 0x72, 0xAF, 0xFF),
        }
    }
}
