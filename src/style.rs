// CSS text for computed effect parameters. Pure string building so it can be
// exercised on the host; `frame.rs` writes the results into element styles.

use crate::constants::*;
use glint_core::constants::{SCROLL_HINT_TRAVEL_PX, TILT_PERSPECTIVE_PX};
use glint_core::{GlowState, GlowStyle, LoopFrame, RevealState, TiltState};
use glam::Vec2;

/// `box-shadow` and `border-color` for a glow card.
pub fn glow_card(state: &GlowState) -> (String, String) {
    let s = GlowStyle::from_state(state);
    let shadow = format!(
        "0 0 {:.1}px rgba({GLOW_RGB}, {:.3}), inset 0 0 {:.1}px rgba({GLOW_RGB}, 0.05)",
        s.shadow_blur_px, s.shadow_alpha, s.inset_blur_px
    );
    let border = format!("rgba({BORDER_RGB}, {:.3})", s.border_alpha);
    (shadow, border)
}

/// `left`, `top` and `opacity` of the highlight disc. `None` hides it.
pub fn glow_highlight(state: &GlowState) -> Option<(String, String, String)> {
    let s = GlowStyle::from_state(state);
    let origin = s.highlight_origin?;
    Some((
        px(origin.x),
        px(origin.y),
        format!("{:.3}", s.highlight_opacity),
    ))
}

/// Perspective rotation. Pitch is negated for `rotateX` so the edge nearest
/// the pointer comes toward the viewer.
pub fn tilt_transform(tilt: &TiltState) -> String {
    format!(
        "perspective({TILT_PERSPECTIVE_PX:.0}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        -tilt.pitch_deg + 0.0,
        tilt.yaw_deg + 0.0
    )
}

pub fn marquee_transform(frame: &LoopFrame) -> String {
    format!(
        "translateX({:.3}%)",
        -MARQUEE_TRAVEL_PERCENT * frame.value + 0.0
    )
}

pub fn scroll_hint_transform(frame: &LoopFrame) -> String {
    format!("translateY({})", px(SCROLL_HINT_TRAVEL_PX * frame.value))
}

pub fn gradient_position(frame: &LoopFrame) -> String {
    format!("{:.2}% 50%", 100.0 * frame.value)
}

/// Drifters move along a diagonal, alternating direction by index.
pub fn drifter_transform(frame: &LoopFrame, index: usize) -> String {
    let dir = if index % 2 == 0 { 1.0 } else { -1.0 };
    let d = DRIFTER_TRAVEL_PX * frame.value * dir;
    format!("translate({}, {})", px(d), px(-d * 0.5))
}

/// `opacity` and `transform` for a card rising into place.
pub fn reveal_style(state: &RevealState) -> (String, String) {
    (
        format!("{:.3}", state.opacity),
        translate_y(state.offset_y_px),
    )
}

pub fn translate(offset: Vec2) -> String {
    format!("translate({}, {})", px(offset.x), px(offset.y))
}

pub fn translate_y(offset: f32) -> String {
    format!("translateY({})", px(offset))
}

#[inline]
pub fn px(v: f32) -> String {
    // `+ 0.0` folds -0.0 into 0.0 so styles never read "-0.0px"
    format!("{:.1}px", v + 0.0)
}
