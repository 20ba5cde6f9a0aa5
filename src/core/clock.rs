use super::scroll::ScrollProgress;
use std::time::Duration;

/// Monotonic elapsed-time counter advanced by the render loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationClock {
    elapsed_sec: f64,
    frames: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame and return the frame delta in seconds.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed_sec += dt.as_secs_f64();
        self.frames += 1;
        dt.as_secs_f32()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_sec as f32
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Read-only per-tick context handed to every animator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSignal {
    pub progress: ScrollProgress,
    pub elapsed: f32,
    pub dt: f32,
}

impl FrameSignal {
    pub fn new(progress: ScrollProgress, clock: &AnimationClock, dt: f32) -> Self {
        Self {
            progress,
            elapsed: clock.elapsed(),
            dt,
        }
    }

    #[inline]
    pub fn frame_step(&self) -> f32 {
        frame_step(self.dt)
    }
}

/// 1 for a real tick, 0 for a repeated or bogus timestamp. Per-frame
/// increments are multiplied by this, never by the frame time.
#[inline]
pub fn frame_step(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() && dt_sec > 0.0 {
        1.0
    } else {
        0.0
    }
}
