// Scroll sampling and normalisation.

/// Raw document metrics captured from the host on a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y,
            scroll_height,
            viewport_height,
        }
    }

    /// Distance the document can actually scroll; never below 1 so the
    /// ratio stays defined for short or unmeasured documents.
    #[inline]
    pub fn scrollable(&self) -> f32 {
        let s = self.scroll_height - self.viewport_height;
        if s.is_finite() {
            s.max(1.0)
        } else {
            1.0
        }
    }
}

/// Normalised scroll position in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp an arbitrary ratio into range; NaN collapses to the start.
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::START;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    pub fn from_offset(scroll_offset: f32, scrollable: f32) -> Self {
        Self::from_ratio(scroll_offset / scrollable.max(1.0))
    }

    pub fn from_metrics(m: &ScrollMetrics) -> Self {
        Self::from_offset(m.scroll_y, m.scrollable())
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// One full turn across the page.
    #[inline]
    pub fn turns(self) -> f32 {
        self.0 * std::f32::consts::TAU
    }
}

/// Holds the latest progress sample and a count of samples taken.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last: ScrollMetrics,
    progress: ScrollProgress,
    samples: u64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute progress from fresh metrics. Returns true when the value
    /// changed so callers can skip redundant DOM writes.
    pub fn sample(&mut self, metrics: ScrollMetrics) -> bool {
        let next = ScrollProgress::from_metrics(&metrics);
        let changed = self.samples == 0 || next != self.progress;
        self.last = metrics;
        self.progress = next;
        self.samples += 1;
        changed
    }

    #[inline]
    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    #[inline]
    pub fn metrics(&self) -> ScrollMetrics {
        self.last
    }

    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Width of the fixed progress bar, 0..=100.
    pub fn progress_percent(&self) -> f32 {
        self.progress.get() * 100.0
    }

    /// Rotation of the corner scroll indicator ring.
    pub fn indicator_degrees(&self) -> f32 {
        self.progress.get() * 360.0
    }
}
