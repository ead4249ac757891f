//! Geometry for the two stacked webviews.

use std::time::{Duration, Instant};

/// Height of the progress bar strip, in logical pixels.
pub const PROGRESS_STRIP_HEIGHT: f64 = 4.0;
/// Strip height while the "no application" notice is up.
pub const NOTICE_STRIP_HEIGHT: f64 = 72.0;
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// What the chrome overlay currently draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub progress: u8,
    pub loading_overlay: bool,
    pub offline_panel: bool,
    pub notice_until: Option<Instant>,
}

/// How much of the window the chrome view must cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeCoverage {
    Hidden,
    /// Bottom strip of the given height; content stays clickable above it.
    Strip(f64),
    Full,
}

impl ChromeState {
    pub fn notice_visible(&self, now: Instant) -> bool {
        self.notice_until.is_some_and(|until| now < until)
    }

    pub fn coverage(&self, now: Instant) -> ChromeCoverage {
        if self.loading_overlay || self.offline_panel {
            ChromeCoverage::Full
        } else if self.notice_visible(now) {
            ChromeCoverage::Strip(NOTICE_STRIP_HEIGHT)
        } else if self.progress < 100 {
            ChromeCoverage::Strip(PROGRESS_STRIP_HEIGHT)
        } else {
            ChromeCoverage::Hidden
        }
    }
}

/// A logical-pixel rectangle inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn to_wry(self) -> wry::Rect {
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(self.x, self.y)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(self.width, self.height)),
        }
    }
}

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    pub width: f64,
    pub height: f64,
}

impl ViewLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The hosted app always fills the window.
    pub fn content_frame(&self) -> Frame {
        Frame {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }

    /// `None` when the chrome view should be hidden.
    pub fn chrome_frame(&self, coverage: ChromeCoverage) -> Option<Frame> {
        match coverage {
            ChromeCoverage::Hidden => None,
            ChromeCoverage::Full => Some(self.content_frame()),
            ChromeCoverage::Strip(height) => {
                let height = height.min(self.height);
                Some(Frame {
                    x: 0.0,
                    y: self.height - height,
                    width: self.width,
                    height,
                })
            }
        }
    }
}
