// Host-side tests for the CSS text produced from effect parameters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use glint_core::{GlowState, LoopFrame, RevealConfig, RevealState, TiltState};
use style::*;

fn loop_frame(value: f32) -> LoopFrame {
    LoopFrame {
        phase: value,
        value,
        current_duration_secs: 20.0,
    }
}

#[test]
fn resting_card_keeps_base_glow() {
    let (shadow, border) = glow_card(&GlowState::NEUTRAL);
    assert_eq!(
        shadow,
        "0 0 20.0px rgba(139, 92, 246, 0.100), inset 0 0 0.0px rgba(139, 92, 246, 0.05)"
    );
    assert_eq!(border, "rgba(255, 255, 255, 0.100)");
    assert!(glow_highlight(&GlowState::NEUTRAL).is_none());
}

#[test]
fn full_glow_centers_highlight_on_pointer() {
    let state = GlowState {
        intensity: 1.0,
        highlight: Some(Vec2::new(100.0, 50.0)),
    };
    let (shadow, _) = glow_card(&state);
    assert!(shadow.starts_with("0 0 50.0px rgba(139, 92, 246, 0.300)"));
    let (left, top, opacity) = glow_highlight(&state).unwrap();
    // 128px disc centred on the pointer
    assert_eq!(left, "36.0px");
    assert_eq!(top, "-14.0px");
    assert_eq!(opacity, "0.600");
}

#[test]
fn tilt_negates_pitch_for_rotate_x() {
    let tilt = TiltState {
        pitch_deg: -8.0,
        yaw_deg: 8.0,
    };
    assert_eq!(
        tilt_transform(&tilt),
        "perspective(1000px) rotateX(8.00deg) rotateY(8.00deg)"
    );
    assert_eq!(
        tilt_transform(&TiltState::ZERO),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
    );
}

#[test]
fn loop_transforms_follow_value() {
    assert_eq!(marquee_transform(&loop_frame(0.0)), "translateX(0.000%)");
    assert_eq!(marquee_transform(&loop_frame(0.5)), "translateX(-25.000%)");
    assert_eq!(scroll_hint_transform(&loop_frame(1.0)), "translateY(10.0px)");
    assert_eq!(gradient_position(&loop_frame(0.25)), "25.00% 50%");
}

#[test]
fn drifters_alternate_direction() {
    assert_eq!(drifter_transform(&loop_frame(1.0), 0), "translate(24.0px, -12.0px)");
    assert_eq!(drifter_transform(&loop_frame(1.0), 1), "translate(-24.0px, 12.0px)");
}

#[test]
fn reveal_starts_low_and_transparent() {
    let hidden = RevealState::hidden(&RevealConfig::default());
    assert_eq!(
        reveal_style(&hidden),
        ("0.000".to_string(), "translateY(50.0px)".to_string())
    );
    assert_eq!(
        reveal_style(&RevealState::SHOWN),
        ("1.000".to_string(), "translateY(0.0px)".to_string())
    );
}

#[test]
fn px_never_prints_negative_zero() {
    assert_eq!(px(-0.0), "0.0px");
    assert_eq!(translate(Vec2::new(-0.0, 3.0)), "translate(0.0px, 3.0px)");
    assert_eq!(translate_y(80.0), "translateY(80.0px)");
}
