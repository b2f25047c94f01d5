use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped on both ends: a minimum keeps tight redraw loops
/// from producing zero-dt frames, a maximum keeps animations from jumping
/// after a stall (debugger pause, minimized window).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful when resuming after suspension so the first frame back does
    /// not see the whole pause as elapsed time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_to_minimum() {
        let mut clock = FrameClock::new();
        clock.tick();
        // Two immediate ticks would yield a near-zero dt without the clamp.
        let ft = clock.tick();
        assert!(ft.dt >= Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn dt_is_clamped_to_maximum() {
        let dt_max = Duration::from_millis(5);
        let mut clock = FrameClock::with_clamps(Duration::from_micros(100), dt_max);
        std::thread::sleep(Duration::from_millis(20));
        let ft = clock.tick();
        assert!(ft.dt <= dt_max.as_secs_f32());
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn reset_drops_elapsed_time_from_next_tick() {
        let mut clock = FrameClock::new();
        clock.tick();
        std::thread::sleep(Duration::from_millis(50));
        clock.reset();
        // The sleep happened before the reset, so the next dt excludes it.
        let ft = clock.tick();
        assert!(ft.dt < Duration::from_millis(50).as_secs_f32());
    }
}
