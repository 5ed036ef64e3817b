// Host-side tests for scroll-into-view reveals: margin boundary, fire-once
// latching and the per-index stagger.

use glint_core::*;
use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

const CARD: WidgetId = WidgetId(5);

fn vp() -> ViewportSignal {
    ViewportSignal::new(1920.0, 1080.0).unwrap()
}

fn card_at(top: f32) -> Option<WidgetGeometry> {
    Some(WidgetGeometry::new(100.0, top, 400.0, 200.0))
}

#[test]
fn margin_shrinks_the_viewport_bottom() {
    // 1080 - 50: the card must start above this line
    assert!(!in_view(card_at(1030.0), vp(), 50.0));
    assert!(in_view(card_at(1029.0), vp(), 50.0));
    assert!(in_view(card_at(1030.0), vp(), 0.0));
}

#[test]
fn margin_shrinks_the_viewport_top() {
    // bottom edge exactly on the margin line is still out of view
    assert!(!in_view(card_at(-150.0), vp(), 50.0));
    assert!(in_view(card_at(-149.0), vp(), 50.0));
}

#[test]
fn unmeasured_card_is_never_in_view() {
    assert!(!in_view(None, vp(), 50.0));
    assert!(!in_view(Some(WidgetGeometry::default()), vp(), 50.0));
}

#[test]
fn reveal_fires_once_and_stays_shown() {
    let mut e = EffectsEngine::default();
    e.viewport().resize(1920.0, 1080.0);
    e.register_reveal(CARD, 0);
    let scrolled = Cell::new(0.0_f32);
    let measure = |id: WidgetId| (id == CARD).then(|| card_at(1200.0 - scrolled.get())).flatten();

    let t0 = Instant::now();
    let first = e.frame(t0, &measure);
    let hidden = RevealState::hidden(&e.config().reveal);
    assert_eq!(first.reveals.as_slice(), &[(CARD, hidden)]);

    scrolled.set(300.0);
    e.scroll().set_progress(0.3);
    let fired = e.frame(t0, &measure);
    assert!(fired.reveals.is_empty(), "progress starts at zero");

    let done = e.frame(t0 + Duration::from_secs(1), &measure);
    assert_eq!(done.reveals.as_slice(), &[(CARD, RevealState::SHOWN)]);

    // scrolling back out does not hide it again
    scrolled.set(0.0);
    e.scroll().set_progress(0.0);
    let back = e.frame(t0 + Duration::from_secs(2), &measure);
    assert!(back.reveals.is_empty());
    assert_eq!(e.reveal(CARD), Some(RevealState::SHOWN));
}

#[test]
fn later_cards_wait_for_their_stagger() {
    let mut e = EffectsEngine::default();
    e.register_reveal(CARD, 2);
    let measure = |id: WidgetId| (id == CARD).then(|| card_at(200.0)).flatten();

    let t0 = Instant::now();
    e.frame(t0, &measure);
    e.frame(t0 + Duration::from_millis(300), &measure);
    assert_eq!(e.reveal(CARD).unwrap().opacity, 0.0);

    e.frame(t0 + Duration::from_millis(1500), &measure);
    assert_eq!(e.reveal(CARD), Some(RevealState::SHOWN));
}

#[test]
fn removed_card_stops_reporting() {
    let mut e = EffectsEngine::default();
    e.register_reveal(CARD, 0);
    e.remove_widget(CARD);
    let report = e.frame(Instant::now(), &|_: WidgetId| card_at(200.0));
    assert!(report.reveals.is_empty());
}
