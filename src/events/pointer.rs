use crate::dom::{self, ListenerGuard};
use crate::frame::WidgetHandle;
use glint_core::EffectsEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window-level pointer, resize and scroll events into the engine's
/// signal sources. The engine coalesces them into one recompute per frame.
pub fn wire_signals(
    window: &web::Window,
    engine: &Rc<RefCell<EffectsEngine>>,
) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();

    // seed with real measurements before the first event arrives
    sync_viewport(window, engine);
    sync_scroll(window, engine);

    let e = engine.clone();
    guards.extend(ListenerGuard::attach(window, "pointermove", move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            e.borrow()
                .pointer()
                .move_to(pe.client_x() as f32, pe.client_y() as f32);
        }
    }));

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let e = engine.clone();
        guards.extend(ListenerGuard::attach(&root, "pointerleave", move |_| {
            e.borrow().pointer().leave();
        }));
    }

    let w = window.clone();
    let e = engine.clone();
    guards.extend(ListenerGuard::attach(window, "resize", move |_| {
        sync_viewport(&w, &e);
        // layout reflows on resize even when scroll does not change
        e.borrow().invalidate();
    }));

    let w = window.clone();
    let e = engine.clone();
    guards.extend(ListenerGuard::attach(window, "scroll", move |_| {
        sync_scroll(&w, &e);
    }));

    guards
}

fn sync_viewport(window: &web::Window, engine: &Rc<RefCell<EffectsEngine>>) {
    if let Some((w, h)) = dom::viewport_size(window) {
        engine.borrow().viewport().resize(w, h);
    }
}

fn sync_scroll(window: &web::Window, engine: &Rc<RefCell<EffectsEngine>>) {
    if let Some((top, range)) = dom::scroll_progress_inputs(window) {
        engine.borrow().scroll().update_from_offsets(top, range);
    }
}

/// Hover enter/leave for widgets whose output depends on hover.
pub fn wire_hover(
    widgets: &[WidgetHandle],
    engine: &Rc<RefCell<EffectsEngine>>,
) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();
    for w in widgets.iter().filter(|w| w.roles.wants_hover()) {
        let id = w.id;
        let e = engine.clone();
        guards.extend(ListenerGuard::attach(&w.element, "pointerenter", move |_| {
            e.borrow_mut().set_hover(id, true);
        }));
        let e = engine.clone();
        guards.extend(ListenerGuard::attach(&w.element, "pointerleave", move |_| {
            e.borrow_mut().set_hover(id, false);
        }));
    }
    guards
}
