// Fixed demo page: a glow card, a tilting portrait and a marquee strip.

use glint_core::{EffectsEngine, TiltMode, WidgetGeometry, WidgetId};
use glam::Vec2;

pub const CARD: WidgetId = WidgetId(0);
pub const PORTRAIT: WidgetId = WidgetId(1);
pub const MARQUEE: WidgetId = WidgetId(2);

/// Modal content box as a fraction of the window.
const MODAL_CONTENT_FRACTION: f32 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoLayout {
    pub size: Vec2,
}

impl DemoLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn register(engine: &mut EffectsEngine) {
        engine.register_glow(CARD);
        engine.register_tilt(CARD, TiltMode::Widget);
        engine.register_reveal(CARD, 0);
        engine.register_tilt(PORTRAIT, TiltMode::Viewport);
        let marquee = engine.page_loops().marquee;
        engine.bind_hover_loop(MARQUEE, marquee);
    }

    pub fn geometry(&self, id: WidgetId) -> Option<WidgetGeometry> {
        let Vec2 { x: w, y: h } = self.size;
        match id {
            CARD => Some(WidgetGeometry::new(w * 0.1, h * 0.2, w * 0.35, h * 0.4)),
            PORTRAIT => Some(WidgetGeometry::new(w * 0.6, h * 0.15, w * 0.25, h * 0.5)),
            MARQUEE => Some(WidgetGeometry::new(0.0, h * 0.8, w, h * 0.1)),
            _ => None,
        }
    }

    /// Widgets whose box contains `p`, used in place of DOM enter/leave.
    pub fn hovered(&self, p: Option<Vec2>) -> [(WidgetId, bool); 2] {
        let over = |id| {
            p.zip(self.geometry(id))
                .is_some_and(|(p, g)| g.contains(p))
        };
        [(CARD, over(CARD)), (MARQUEE, over(MARQUEE))]
    }

    pub fn modal_content_contains(&self, p: Vec2) -> bool {
        let half = self.size * MODAL_CONTENT_FRACTION * 0.5;
        let center = self.size * 0.5;
        (p - center).abs().cmple(half).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_follows_boxes() {
        let layout = DemoLayout::new(1000.0, 1000.0);
        let inside_card = Some(Vec2::new(150.0, 300.0));
        assert_eq!(layout.hovered(inside_card), [(CARD, true), (MARQUEE, false)]);
        let on_marquee = Some(Vec2::new(500.0, 850.0));
        assert_eq!(layout.hovered(on_marquee), [(CARD, false), (MARQUEE, true)]);
        assert_eq!(layout.hovered(None), [(CARD, false), (MARQUEE, false)]);
    }

    #[test]
    fn modal_content_is_centered() {
        let layout = DemoLayout::new(1000.0, 800.0);
        assert!(layout.modal_content_contains(Vec2::new(500.0, 400.0)));
        assert!(!layout.modal_content_contains(Vec2::new(10.0, 10.0)));
    }
}
