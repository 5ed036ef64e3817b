use crate::constants::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};
use crate::signal::{Signal, SignalSource};
use glam::Vec2;

/// Viewport size in CSS pixels. Both dimensions are always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSignal {
    width: f32,
    height: f32,
}

impl Default for ViewportSignal {
    fn default() -> Self {
        Self {
            width: FALLBACK_VIEWPORT_WIDTH,
            height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportSignal {
    /// `None` unless both dimensions are positive and finite.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.half_extents()
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Process-wide viewport dimensions, updated on resize.
pub struct ViewportSource {
    source: SignalSource<ViewportSignal>,
}

impl Default for ViewportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportSource {
    pub fn new() -> Self {
        Self {
            source: SignalSource::new(ViewportSignal::default()),
        }
    }

    /// Apply a resize. Degenerate sizes (minimised window, zero-height
    /// iframe) keep the previous value.
    pub fn resize(&self, width: f32, height: f32) {
        match ViewportSignal::new(width, height) {
            Some(size) if size != self.source.read() => self.source.set(size),
            Some(_) => {}
            None => log::warn!("[signal] ignoring degenerate viewport {width}x{height}"),
        }
    }

    pub fn read(&self) -> ViewportSignal {
        self.source.read()
    }

    pub fn signal(&self) -> Signal<ViewportSignal> {
        self.source.signal()
    }
}
