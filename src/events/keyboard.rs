use crate::dom::ListenerGuard;
use crate::modal;
use glint_core::EffectsEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape dismisses the contact overlay.
pub fn wire_keydown(
    window: &web::Window,
    engine: &Rc<RefCell<EffectsEngine>>,
) -> Option<ListenerGuard> {
    let engine = engine.clone();
    ListenerGuard::attach(window, "keydown", move |ev| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.repeat() {
            return;
        }
        if modal::handle_key(&engine, &kev.key()) {
            kev.prevent_default();
        }
    })
}
