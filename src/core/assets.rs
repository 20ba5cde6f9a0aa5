// Load bookkeeping behind the "N% loaded" indicator.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

impl AssetStatus {
    #[inline]
    pub fn is_settled(self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// Tracks every asset the page asked for. A failed asset counts as settled
/// so the indicator always completes; the caller shows a placeholder.
#[derive(Clone, Debug, Default)]
pub struct AssetTracker {
    entries: FnvHashMap<String, AssetStatus>,
    loaded: usize,
    failed: usize,
}

impl AssetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` as pending. Registering a known key is a no-op and
    /// returns false.
    pub fn register(&mut self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), AssetStatus::Pending);
        true
    }

    pub fn mark_loaded(&mut self, key: &str) -> bool {
        self.settle(key, AssetStatus::Loaded)
    }

    pub fn mark_failed(&mut self, key: &str) -> bool {
        self.settle(key, AssetStatus::Failed)
    }

    fn settle(&mut self, key: &str, status: AssetStatus) -> bool {
        match self.entries.get_mut(key) {
            Some(s) if *s == AssetStatus::Pending => {
                *s = status;
                match status {
                    AssetStatus::Loaded => self.loaded += 1,
                    AssetStatus::Failed => self.failed += 1,
                    AssetStatus::Pending => {}
                }
                true
            }
            _ => false,
        }
    }

    pub fn status(&self, key: &str) -> Option<AssetStatus> {
        self.entries.get(key).copied()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }

    #[inline]
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.settled() == self.total()
    }

    /// 0..=100; an empty tracker reports 100.
    pub fn progress_percent(&self) -> f32 {
        if self.entries.is_empty() {
            return 100.0;
        }
        self.settled() as f32 / self.total() as f32 * 100.0
    }

    pub fn label(&self) -> String {
        format!("{:.0}% loaded", self.progress_percent())
    }
}
