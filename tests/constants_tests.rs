// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use glint_core::constants as core;

#[test]
fn config_prefix_matches_role_attribute() {
    // dataset keys drop the `data-` prefix and camel-case the rest
    assert_eq!(ROLE_ATTR, format!("data-{CONFIG_ATTR_PREFIX}"));
    assert!(HIGHLIGHT_ATTR.starts_with(ROLE_ATTR));
    assert!(OPEN_CONTACT_ATTR.starts_with(ROLE_ATTR));
}

#[test]
fn overlay_ids_are_distinct() {
    assert_ne!(OVERLAY_ID, OVERLAY_CONTENT_ID);
    assert_ne!(OVERLAY_ID, OVERLAY_CLOSE_ID);
    assert_ne!(OVERLAY_CONTENT_ID, OVERLAY_CLOSE_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(MARQUEE_TRAVEL_PERCENT > 0.0 && MARQUEE_TRAVEL_PERCENT <= 100.0);
    assert!(DRIFTER_TRAVEL_PX > 0.0);
    assert!(core::MARQUEE_HOVER_MULTIPLIER > 0.0 && core::MARQUEE_HOVER_MULTIPLIER < 1.0);
    assert!(core::DRIFTER_MIN_SECS < core::DRIFTER_MAX_SECS);
    assert!(core::MAX_FRAME_STEP_SECS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_tilt_saturates_inside_card() {
    // 14 deg is reached 112px from the centre, well inside a typical card
    let saturation_px = core::CARD_TILT_MAX_DEG * core::CARD_TILT_DIVISOR_PX;
    assert_eq!(saturation_px, 112.0);
    assert!(saturation_px < core::GLOW_FALLOFF_RADIUS_PX);
}

#[test]
fn highlight_disc_fits_glow_radius() {
    assert!(core::GLOW_HIGHLIGHT_DIAMETER_PX < core::GLOW_FALLOFF_RADIUS_PX);
    assert!(core::SPOTLIGHT_DIAMETER_PX > core::GLOW_HIGHLIGHT_DIAMETER_PX);
}
