//! Page load progress tracking.
//!
//! `LoadProgress` owns the [`LoadState`] and turns raw progress callbacks
//! into UI transitions. Progress is monotonic within one page load: repeats
//! and decreases are dropped so the bar never flickers backwards.

/// Where the current page load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has loaded yet.
    Bootstrapping,
    Loading { progress: u8 },
    /// The completion threshold was crossed for the current page.
    Ready,
    /// A main-document load failed; only a retry leaves this state.
    Offline,
}

/// UI effect of one progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTransition {
    /// Dropped: repeat, regression, or offline.
    Ignored,
    /// Still loading; update the bar.
    Advanced(u8),
    /// Threshold crossed: lift the loading overlay. Fires once per page.
    Revealed(u8),
    /// Sub-load progress after the page is ready; bar only, overlay stays down.
    Background(u8),
}

#[derive(Debug, Clone)]
pub struct LoadProgress {
    state: LoadState,
    threshold: u8,
}

impl LoadProgress {
    /// `threshold` is clamped to `1..=100`.
    pub fn new(threshold: u8) -> Self {
        Self {
            state: LoadState::Bootstrapping,
            threshold: threshold.clamp(1, 100),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn is_offline(&self) -> bool {
        self.state == LoadState::Offline
    }

    pub fn on_progress(&mut self, progress: u8) -> ProgressTransition {
        let progress = progress.min(100);
        match self.state {
            LoadState::Offline => ProgressTransition::Ignored,
            LoadState::Ready => ProgressTransition::Background(progress),
            LoadState::Loading { progress: current } if progress <= current => {
                ProgressTransition::Ignored
            }
            LoadState::Bootstrapping | LoadState::Loading { .. } => {
                if progress >= self.threshold {
                    self.state = LoadState::Ready;
                    ProgressTransition::Revealed(progress)
                } else {
                    self.state = LoadState::Loading { progress };
                    ProgressTransition::Advanced(progress)
                }
            }
        }
    }

    /// An in-scope page started loading. Returns `true` when the loading
    /// overlay should be shown.
    pub fn on_navigation_start(&mut self) -> bool {
        match self.state {
            LoadState::Offline => false,
            _ => {
                self.state = LoadState::Loading { progress: 0 };
                true
            }
        }
    }

    pub fn on_fatal_error(&mut self) {
        self.state = LoadState::Offline;
    }

    /// Leave `Offline` for a fresh load. No-op in any other state.
    pub fn on_retry(&mut self) -> bool {
        if self.state == LoadState::Offline {
            self.state = LoadState::Loading { progress: 0 };
            true
        } else {
            false
        }
    }
}
