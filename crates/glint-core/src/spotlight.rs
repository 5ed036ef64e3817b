use crate::constants::{HALO_SHIFT_SPAN_PX, SPOTLIGHT_DIAMETER_PX};
use crate::pointer::PointerSignal;
use crate::viewport::ViewportSignal;
use glam::Vec2;

/// Top-left corner of the spotlight disc so that it is centered on the
/// pointer. `None` while the pointer is offscreen.
pub fn spotlight_origin(pointer: Option<PointerSignal>) -> Option<Vec2> {
    pointer.map(|p| p.as_vec2() - Vec2::splat(SPOTLIGHT_DIAMETER_PX * 0.5))
}

/// Halo translation: the pointer's normalized offset from the viewport
/// center scaled to `HALO_SHIFT_SPAN_PX`.
pub fn halo_shift(pointer: Option<PointerSignal>, viewport: ViewportSignal) -> Vec2 {
    let Some(p) = pointer else {
        return Vec2::ZERO;
    };
    let uv = Vec2::new(p.x / viewport.width(), p.y / viewport.height());
    (uv - Vec2::splat(0.5)) * HALO_SHIFT_SPAN_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_is_centered_on_pointer() {
        let origin = spotlight_origin(Some(PointerSignal::new(400.0, 300.0))).unwrap();
        assert_eq!(origin, Vec2::new(100.0, 0.0));
        assert!(spotlight_origin(None).is_none());
    }

    #[test]
    fn halo_is_still_at_center_and_offscreen() {
        let vp = ViewportSignal::default();
        assert_eq!(halo_shift(Some(PointerSignal::new(960.0, 540.0)), vp), Vec2::ZERO);
        assert_eq!(halo_shift(None, vp), Vec2::ZERO);
        assert_eq!(
            halo_shift(Some(PointerSignal::new(1920.0, 0.0)), vp),
            Vec2::new(8.0, -8.0)
        );
    }
}
