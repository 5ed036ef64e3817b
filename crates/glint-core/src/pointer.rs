use crate::signal::{Signal, SignalSource};
use glam::Vec2;

/// Pointer position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Process-wide pointer position.
///
/// Reads `None` until the first move event and again after the pointer leaves
/// the window; every computer treats `None` as "offscreen" and produces
/// neutral output.
pub struct PointerSource {
    source: SignalSource<Option<PointerSignal>>,
}

impl Default for PointerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSource {
    pub fn new() -> Self {
        Self {
            source: SignalSource::new(None),
        }
    }

    pub fn move_to(&self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            log::debug!("[signal] ignoring non-finite pointer ({x}, {y})");
            return;
        }
        self.source.set(Some(PointerSignal { x, y }));
    }

    /// Pointer left the window.
    pub fn leave(&self) {
        if self.source.read().is_some() {
            self.source.set(None);
        }
    }

    pub fn read(&self) -> Option<PointerSignal> {
        self.source.read()
    }

    pub fn signal(&self) -> Signal<Option<PointerSignal>> {
        self.source.signal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_none_before_first_move() {
        let pointer = PointerSource::new();
        assert_eq!(pointer.read(), None);
        pointer.move_to(10.0, 20.0);
        assert_eq!(pointer.read(), Some(PointerSignal::new(10.0, 20.0)));
    }

    #[test]
    fn non_finite_moves_are_dropped() {
        let pointer = PointerSource::new();
        pointer.move_to(5.0, 5.0);
        pointer.move_to(f32::NAN, 1.0);
        assert_eq!(pointer.read(), Some(PointerSignal::new(5.0, 5.0)));
        assert_eq!(pointer.signal().version(), 1);
    }

    #[test]
    fn leave_goes_offscreen() {
        let pointer = PointerSource::new();
        pointer.move_to(1.0, 1.0);
        pointer.leave();
        assert_eq!(pointer.read(), None);
    }
}
