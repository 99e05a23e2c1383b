use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Per-window frame stamper.
///
/// Produces one `FrameTime` per presented frame. Delta computation is not
/// done here; the fixed-step accumulator (`StepClock`) owns its own previous
/// timestamp so step counting stays independent of frame bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the current frame and advances the counter.
    pub fn tick(&mut self) -> FrameTime {
        let ft = FrameTime {
            now: Instant::now(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
