use std::time::{Duration, Instant};

/// Default logical step duration: 60 steps per second.
const DEFAULT_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Fixed-timestep accumulator.
///
/// Converts an irregular sequence of frame timestamps into a regular sequence
/// of fixed-duration simulation steps, so simulation behavior is independent
/// of display refresh rate and frame jitter. Leftover time below one interval
/// is carried forward, never dropped: over any elapsed span the number of
/// steps is exactly `floor(elapsed / interval)` regardless of how the span is
/// chunked across `advance` calls.
///
/// The first `advance` call only records a baseline and yields zero steps.
/// Defaulting the baseline to a fixed origin instead would inject a burst of
/// catch-up steps on startup.
#[derive(Debug, Clone)]
pub struct StepClock {
    previous: Option<Instant>,
    accumulator: Duration,
    interval: Duration,
}

impl StepClock {
    /// Creates a clock with the given logical step duration.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            previous: None,
            accumulator: Duration::ZERO,
            interval,
        }
    }

    /// Feeds a frame timestamp and returns how many fixed steps it covers.
    ///
    /// Timestamps must be non-decreasing; `Instant` guarantees monotonicity.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(previous) = self.previous else {
            self.previous = Some(now);
            return 0;
        };

        self.accumulator += now.saturating_duration_since(previous);
        self.previous = Some(now);

        let mut steps = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            steps += 1;
        }
        steps
    }

    /// Unconsumed simulated time; always in `[0, interval)` after `advance`.
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── baseline ──────────────────────────────────────────────────────────

    #[test]
    fn first_advance_yields_no_steps() {
        let mut clock = StepClock::default();
        // The baseline instant is arbitrary; no catch-up burst may occur.
        assert_eq!(clock.advance(Instant::now()), 0);
        assert_eq!(clock.accumulator(), Duration::ZERO);
    }

    // ── step counting ─────────────────────────────────────────────────────

    #[test]
    fn sixteen_then_thirtythree_ms() {
        // Frame timestamps 0 / 16 / 33 ms at a 16.67 ms interval:
        // 16 ms is short of one interval, 33 ms covers exactly one.
        let base = Instant::now();
        let mut clock = StepClock::default();

        assert_eq!(clock.advance(base), 0);
        assert_eq!(clock.advance(base + ms(16)), 0);
        assert_eq!(clock.advance(base + ms(33)), 1);

        // Remainder carried forward: 33 ms minus one interval.
        assert_eq!(clock.accumulator(), ms(33) - clock.interval());
    }

    #[test]
    fn long_frame_drains_multiple_steps() {
        let base = Instant::now();
        let mut clock = StepClock::default();
        clock.advance(base);

        // 100 ms is exactly six 1/60 s intervals.
        assert_eq!(clock.advance(base + ms(100)), 6);
        assert!(clock.accumulator() < clock.interval());
    }

    #[test]
    fn total_steps_equal_floor_of_elapsed() {
        let base = Instant::now();
        let mut clock = StepClock::default();
        clock.advance(base);

        let mut total: u64 = 0;
        for i in 1..=120 {
            total += u64::from(clock.advance(base + ms(i * 7)));
        }

        let elapsed = ms(120 * 7);
        let expected = (elapsed.as_nanos() / clock.interval().as_nanos()) as u64;
        assert_eq!(total, expected);
    }

    #[test]
    fn step_count_is_chunking_independent() {
        let base = Instant::now();

        let mut chunked = StepClock::default();
        chunked.advance(base);
        let mut chunked_total: u64 = 0;
        for i in 1..=250 {
            chunked_total += u64::from(chunked.advance(base + ms(i * 4)));
        }

        let mut oneshot = StepClock::default();
        oneshot.advance(base);
        let oneshot_total = u64::from(oneshot.advance(base + ms(1000)));

        assert_eq!(chunked_total, oneshot_total);
        assert_eq!(chunked.accumulator(), oneshot.accumulator());
    }

    // ── accumulator invariant ─────────────────────────────────────────────

    #[test]
    fn accumulator_stays_below_one_interval() {
        let base = Instant::now();
        let mut clock = StepClock::default();
        clock.advance(base);

        // Irregular frame pacing, including stalls longer than one interval.
        let offsets = [3u64, 9, 40, 41, 90, 200, 203, 500];
        for off in offsets {
            clock.advance(base + ms(off));
            assert!(clock.accumulator() < clock.interval());
        }
    }

    #[test]
    fn custom_interval() {
        let base = Instant::now();
        let mut clock = StepClock::new(ms(10));
        clock.advance(base);
        assert_eq!(clock.advance(base + ms(35)), 3);
        assert_eq!(clock.accumulator(), ms(5));
    }
}
