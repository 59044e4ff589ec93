use std::time::{Duration, Instant};

/// Timing of one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub now: Instant,
    pub frame_index: u64,
}

/// Frame clock with optional frame-rate pacing.
///
/// Call [`tick`](Self::tick) at the start of a frame and
/// [`pace`](Self::pace) at its end; `pace` sleeps for whatever is left of the
/// frame budget. Delta time is clamped so a stall (debugger, minimised
/// window) does not produce a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    budget: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            budget: None,
        }
    }

    /// Clock pacing to `fps` frames per second. `0` disables pacing.
    pub fn with_target_fps(fps: u32) -> Self {
        let mut clock = Self::new();
        clock.set_target_fps(fps);
        clock
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.budget = (fps > 0).then(|| Duration::from_secs(1) / fps);
    }

    /// Time allotted to one frame, if pacing is enabled.
    #[inline]
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Budget left for the current frame, measured from the last tick.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    fn remaining_at(&self, now: Instant) -> Duration {
        match self.budget {
            Some(budget) => budget.saturating_sub(now.saturating_duration_since(self.last)),
            None => Duration::ZERO,
        }
    }

    /// Sleeps until the current frame's budget is used up.
    pub fn pace(&self) {
        let left = self.remaining();
        if !left.is_zero() {
            std::thread::sleep(left);
        }
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
    fn target_fps_sets_budget() {
        assert_eq!(FrameClock::with_target_fps(50).budget(), Some(Duration::from_millis(20)));
        assert_eq!(FrameClock::with_target_fps(0).budget(), None);
    }

    #[test]
    fn remaining_shrinks_with_elapsed_time() {
        let clock = FrameClock::with_target_fps(10);
        let later = clock.last + Duration::from_millis(40);
        assert_eq!(clock.remaining_at(later), Duration::from_millis(60));

        let overrun = clock.last + Duration::from_millis(500);
        assert_eq!(clock.remaining_at(overrun), Duration::ZERO);
    }

    #[test]
    fn unpaced_clock_never_waits() {
        let clock = FrameClock::new();
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn tick_counts_frames_and_clamps_dt() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!(b.dt > 0.0 && b.dt <= 0.25);
    }
}
