use crate::constants::{PARALLAX_OFFSET_END_PX, PARALLAX_PROGRESS_END};
use crate::signal::{Signal, SignalSource};

/// Normalized vertical scroll progress: 0 at the top of the tracked range,
/// 1 at its bottom.
pub struct ScrollSource {
    source: SignalSource<f32>,
}

impl Default for ScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource {
    pub fn new() -> Self {
        Self {
            source: SignalSource::new(0.0),
        }
    }

    pub fn set_progress(&self, progress: f32) {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if p != self.source.read() {
            self.source.set(p);
        }
    }

    /// Progress from raw offsets, where `scroll_range` is the scrollable
    /// distance (document height minus viewport height, or a shorter tracked
    /// range).
    pub fn update_from_offsets(&self, scroll_top: f32, scroll_range: f32) {
        self.set_progress(progress_from_offsets(scroll_top, scroll_range));
    }

    pub fn read(&self) -> f32 {
        self.source.read()
    }

    pub fn signal(&self) -> Signal<f32> {
        self.source.signal()
    }
}

#[inline]
pub fn progress_from_offsets(scroll_top: f32, scroll_range: f32) -> f32 {
    if scroll_range > 0.0 && scroll_top.is_finite() {
        (scroll_top / scroll_range).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clamped linear map from a scroll progress window to a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxMap {
    pub input: [f32; 2],
    pub output: [f32; 2],
}

impl Default for ParallaxMap {
    fn default() -> Self {
        Self {
            input: [0.0, PARALLAX_PROGRESS_END],
            output: [0.0, PARALLAX_OFFSET_END_PX],
        }
    }
}

impl ParallaxMap {
    pub fn offset(&self, progress: f32) -> f32 {
        let [a, b] = self.input;
        let [c, d] = self.output;
        let span = b - a;
        if span.abs() <= f32::EPSILON {
            return if progress < a { c } else { d };
        }
        let t = ((progress - a) / span).clamp(0.0, 1.0);
        c + (d - c) * t
    }
}
