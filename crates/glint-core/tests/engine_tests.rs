// Host-side tests for the engine: signal wiring, per-frame coalescing,
// hover gating and teardown.

use glint_core::*;
use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

const CARD: WidgetId = WidgetId(1);
const PHOTO: WidgetId = WidgetId(2);
const INTRO: WidgetId = WidgetId(3);
const MARQUEE: WidgetId = WidgetId(4);

fn layout(id: WidgetId) -> Option<WidgetGeometry> {
    match id {
        CARD => Some(WidgetGeometry::new(100.0, 100.0, 200.0, 200.0)),
        INTRO => Some(WidgetGeometry::new(800.0, 100.0, 200.0, 100.0)),
        _ => None,
    }
}

fn engine() -> EffectsEngine {
    let mut e = EffectsEngine::default();
    e.register_glow(CARD);
    e.register_tilt(CARD, TiltMode::Widget);
    e.register_tilt(PHOTO, TiltMode::Viewport);
    e.register_glow(INTRO);
    e.viewport().resize(1920.0, 1080.0);
    e
}

#[test]
fn first_frame_before_input_is_neutral() {
    let mut e = engine();
    let report = e.frame(Instant::now(), &layout);
    assert!(report.glows.is_empty());
    assert!(report.tilts.is_empty());
    assert_eq!(e.glow(CARD), GlowState::NEUTRAL);
    assert_eq!(e.tilt(PHOTO), TiltState::ZERO);
    assert_eq!(report.modal, ModalState::Closed);
}

#[test]
fn pointer_move_updates_glow_and_viewport_tilt() {
    let mut e = engine();
    e.pointer().move_to(200.0, 200.0);
    let report = e.frame(Instant::now(), &layout);
    assert_eq!(e.glow(CARD).intensity, 1.0);
    assert_eq!(e.glow(INTRO).intensity, 0.0);
    assert!(report.glows.iter().any(|(id, g)| *id == CARD && g.intensity == 1.0));
    assert!(report.tilts.iter().any(|(id, _)| *id == PHOTO));
    // card is not hovered, so no widget tilt
    assert_eq!(e.tilt(CARD), TiltState::ZERO);
}

#[test]
fn burst_of_moves_costs_one_recompute() {
    let mut e = engine();
    let measured = Cell::new(0);
    let counting = |id: WidgetId| {
        measured.set(measured.get() + 1);
        layout(id)
    };
    for i in 0..50 {
        e.pointer().move_to(i as f32, i as f32);
    }
    e.frame(Instant::now(), &counting);
    let after_first = measured.get();
    assert!(after_first > 0);
    e.frame(Instant::now(), &counting);
    assert_eq!(measured.get(), after_first, "idle frame must not re-measure");
}

#[test]
fn hover_gates_card_tilt() {
    let mut e = engine();
    e.pointer().move_to(240.0, 176.0);
    e.frame(Instant::now(), &layout);
    assert_eq!(e.tilt(CARD), TiltState::ZERO);

    e.set_hover(CARD, true);
    let report = e.frame(Instant::now(), &layout);
    let t = e.tilt(CARD);
    assert!((t.yaw_deg - 5.0).abs() < 1e-5);
    assert!(report.tilts.iter().any(|(id, _)| *id == CARD));

    e.set_hover(CARD, false);
    e.frame(Instant::now(), &layout);
    assert_eq!(e.tilt(CARD), TiltState::ZERO);
}

#[test]
fn pointer_leaving_window_neutralises_everything() {
    let mut e = engine();
    e.set_hover(CARD, true);
    e.pointer().move_to(200.0, 200.0);
    e.frame(Instant::now(), &layout);
    e.pointer().leave();
    e.frame(Instant::now(), &layout);
    assert_eq!(e.glow(CARD), GlowState::NEUTRAL);
    assert_eq!(e.tilt(CARD), TiltState::ZERO);
    assert_eq!(e.tilt(PHOTO), TiltState::ZERO);
}

#[test]
fn layout_shift_needs_invalidate() {
    let mut e = EffectsEngine::default();
    e.register_glow(CARD);
    e.pointer().move_to(200.0, 200.0);
    let moved = Cell::new(false);
    let shifting = |id: WidgetId| {
        if moved.get() {
            Some(WidgetGeometry::new(1000.0, 1000.0, 200.0, 200.0))
        } else {
            layout(id)
        }
    };
    e.frame(Instant::now(), &shifting);
    assert_eq!(e.glow(CARD).intensity, 1.0);
    moved.set(true);
    e.frame(Instant::now(), &shifting);
    assert_eq!(e.glow(CARD).intensity, 1.0);
    e.invalidate();
    e.frame(Instant::now(), &shifting);
    assert_eq!(e.glow(CARD).intensity, 0.0);
}

#[test]
fn marquee_hover_binding_changes_duration_only() {
    let mut e = EffectsEngine::default();
    let marquee = e.page_loops().marquee;
    e.bind_hover_loop(MARQUEE, marquee);

    let t0 = Instant::now();
    e.frame(t0, &layout);
    e.frame(t0 + Duration::from_millis(200), &layout);
    let before = e.loops().frame(marquee).unwrap();
    assert_eq!(before.current_duration_secs, 20.0);

    e.set_hover(MARQUEE, true);
    let during = e.loops().frame(marquee).unwrap();
    assert_eq!(during.phase, before.phase);
    assert_eq!(during.current_duration_secs, 10.0);

    e.set_hover(MARQUEE, false);
    assert_eq!(e.loops().frame(marquee).unwrap().current_duration_secs, 20.0);
}

#[test]
fn removing_hovered_marquee_restores_speed() {
    let mut e = EffectsEngine::default();
    let marquee = e.page_loops().marquee;
    e.bind_hover_loop(MARQUEE, marquee);
    e.set_hover(MARQUEE, true);
    assert!(e.remove_widget(MARQUEE));
    assert_eq!(e.loops().frame(marquee).unwrap().current_duration_secs, 20.0);
    assert!(!e.remove_widget(MARQUEE));
}

#[test]
fn removed_widget_is_not_measured() {
    let mut e = engine();
    e.remove_widget(CARD);
    e.pointer().move_to(10.0, 10.0);
    let asked_for_card = Cell::new(false);
    e.frame(Instant::now(), &|id: WidgetId| {
        if id == CARD {
            asked_for_card.set(true);
        }
        layout(id)
    });
    assert!(!asked_for_card.get());
    assert_eq!(e.widget_count(), 2);
}

#[test]
fn page_frame_reports_spotlight_halo_and_parallax() {
    let mut e = EffectsEngine::default();
    let first = e.frame(Instant::now(), &layout).page.unwrap();
    assert_eq!(first.spotlight_origin, None);
    assert_eq!(first.parallax_px, 0.0);

    assert!(e.frame(Instant::now(), &layout).page.is_none());

    e.scroll().set_progress(0.25);
    e.pointer().move_to(960.0, 540.0);
    let page = e.frame(Instant::now(), &layout).page.unwrap();
    assert!((page.parallax_px - 40.0).abs() < 1e-4);
    assert_eq!(page.spotlight_origin, Some(glam::Vec2::new(660.0, 240.0)));
    assert_eq!(page.halo_shift, glam::Vec2::ZERO);
}

#[test]
fn loops_are_reported_every_frame() {
    let mut e = EffectsEngine::default();
    let n = e.loops().len();
    assert_eq!(n, 3 + e.config().drifter_count);
    let t0 = Instant::now();
    assert_eq!(e.frame(t0, &layout).loops.len(), n);
    assert_eq!(e.frame(t0 + Duration::from_millis(16), &layout).loops.len(), n);
}

#[test]
fn engine_drop_releases_signal_subscriptions() {
    let e = EffectsEngine::default();
    let pointer_signal = e.pointer().signal();
    assert_eq!(pointer_signal.subscriber_count(), 1);
    drop(e);
    assert_eq!(pointer_signal.subscriber_count(), 0);
}

#[test]
fn lone_frame_without_scheduler_publishes_resting_styles() {
    // a host that cannot schedule ticks renders exactly one frame
    let mut e = EffectsEngine::default();
    let marquee = e.page_loops().marquee;
    let report = e.frame(Instant::now(), &layout);
    let page = report.page.expect("first frame always carries page values");
    assert_eq!(page.spotlight_origin, None);
    assert_eq!(page.halo_shift, glam::Vec2::ZERO);
    let (_, frame) = report.loops.iter().find(|(id, _)| *id == marquee).unwrap();
    assert_eq!(frame.phase, 0.0);
    assert_eq!(frame.value, 0.0);
}
