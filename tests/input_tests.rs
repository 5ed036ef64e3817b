// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn roles_parse_space_separated_list() {
    let roles = Roles::parse("glow  tilt-card");
    assert!(roles.glow);
    assert!(roles.tilt_card);
    assert!(!roles.tilt_viewport);
    assert!(roles.is_widget());
    assert!(roles.wants_hover());
}

#[test]
fn unknown_roles_are_ignored() {
    let roles = Roles::parse("sparkle spotlight");
    assert_eq!(
        roles,
        Roles {
            spotlight: true,
            ..Roles::default()
        }
    );
    assert!(!roles.is_widget());
}

#[test]
fn viewport_tilt_does_not_need_hover() {
    let roles = Roles::parse("tilt-viewport halo");
    assert!(roles.is_widget());
    assert!(!roles.wants_hover());
}

#[test]
fn marquee_is_a_hover_widget() {
    let roles = Roles::parse("marquee");
    assert!(roles.is_widget());
    assert!(roles.wants_hover());
}

#[test]
fn reveal_cards_are_widgets_without_hover() {
    let roles = Roles::parse("reveal glow");
    assert!(roles.reveal);
    assert!(roles.is_widget());
    assert!(!roles.wants_hover());
}

#[test]
fn scroll_range_is_never_negative() {
    assert_eq!(scroll_range(3000.0, 1000.0), 2000.0);
    assert_eq!(scroll_range(800.0, 1000.0), 0.0);
}

#[test]
fn override_key_converts_dataset_case() {
    assert_eq!(
        override_key("glintGlowRadius", "glint").as_deref(),
        Some("glow-radius")
    );
    assert_eq!(
        override_key("glintMarqueeHoverMultiplier", "glint").as_deref(),
        Some("marquee-hover-multiplier")
    );
    assert_eq!(override_key("glintDrifterSeed", "glint").as_deref(), Some("drifter-seed"));
}

#[test]
fn override_key_rejects_foreign_keys() {
    assert_eq!(override_key("theme", "glint"), None);
    assert_eq!(override_key("glint", "glint"), None);
    assert_eq!(override_key("glintlower", "glint"), None);
}
