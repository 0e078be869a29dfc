use std::time::{Duration, Instant};

/// Tracks the loop boundaries of a single running animation.
#[derive(Debug)]
pub(crate) struct AnimationClock {
    duration: Duration,
    start_time: Option<Instant>,
    completed_iterations: u64,
}

/// What happened to an animation since the previous tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ClockTick {
    /// Whether this tick started the animation.
    pub(crate) started: bool,
    /// How many iterations completed since the previous tick.
    pub(crate) completed: u64,
    /// Position within the current iteration, in `[0, 1)`.
    pub(crate) progress: f32,
    /// Time since the animation started.
    pub(crate) elapsed: Duration,
}

impl AnimationClock {
    pub(crate) fn new(duration: Duration) -> Self {
        Self { duration: duration.max(Duration::from_millis(1)), start_time: None, completed_iterations: 0 }
    }

    /// Advance the clock to `now`.
    ///
    /// The first tick starts the animation. Ticks that arrive late report every boundary they
    /// skipped over, so no iteration is ever lost.
    pub(crate) fn tick(&mut self, now: Instant) -> ClockTick {
        let Some(start_time) = self.start_time else {
            self.start_time = Some(now);
            return ClockTick { started: true, completed: 0, progress: 0.0, elapsed: Duration::ZERO };
        };

        let elapsed = now.saturating_duration_since(start_time);
        let cycle = self.duration.as_nanos();
        let total_iterations = (elapsed.as_nanos() / cycle) as u64;
        let completed = total_iterations.saturating_sub(self.completed_iterations);
        self.completed_iterations = self.completed_iterations.max(total_iterations);

        let progress = (elapsed.as_nanos() % cycle) as f32 / cycle as f32;
        ClockTick { started: false, completed, progress, elapsed }
    }
}
