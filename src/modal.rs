use crate::constants::*;
use crate::dom::{self, ListenerGuard};
use glint_core::{EffectsEngine, HitRegion, KeyAction, ModalState, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "display:none");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

pub fn apply(document: &web::Document, state: ModalState) {
    match state {
        ModalState::Open => show(document),
        ModalState::Closed => hide(document),
    }
}

/// Classify a click on the overlay. Anything inside the content box is
/// `Content`; everything else on the overlay is the dismissing backdrop.
fn hit_region(content: Option<&web::Element>, ev: &web::Event) -> HitRegion {
    let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
    match (content, target) {
        (Some(c), Some(t)) if c.contains(Some(&t)) => HitRegion::Content,
        _ => HitRegion::Backdrop,
    }
}

/// Listeners and the state subscription for the contact overlay. Dropping
/// it detaches everything.
pub struct ModalWiring {
    _listeners: Vec<ListenerGuard>,
    _state: Subscription,
}

pub fn wire(document: &web::Document, engine: &Rc<RefCell<EffectsEngine>>) -> ModalWiring {
    let mut listeners = Vec::new();

    let doc = document.clone();
    let state = engine.borrow().modal().signal().subscribe(move |s| apply(&doc, s));
    apply(document, engine.borrow().modal().state());

    if let Ok(openers) = document.query_selector_all(&format!("[{OPEN_CONTACT_ATTR}]")) {
        for i in 0..openers.length() {
            let Some(node) = openers.item(i) else {
                continue;
            };
            let engine = engine.clone();
            listeners.extend(ListenerGuard::attach(&node, "click", move |ev| {
                ev.prevent_default();
                engine.borrow().modal().request_open();
            }));
        }
    }

    let engine_close = engine.clone();
    listeners.extend(dom::add_click_listener(document, OVERLAY_CLOSE_ID, move |_| {
        engine_close.borrow().modal().request_close();
    }));

    if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
        let content = document.get_element_by_id(OVERLAY_CONTENT_ID);
        let engine = engine.clone();
        listeners.extend(ListenerGuard::attach(&overlay, "click", move |ev| {
            let region = hit_region(content.as_ref(), &ev);
            if region == HitRegion::Content {
                ev.stop_propagation();
            }
            engine.borrow().modal().click(region);
        }));
    } else {
        log::warn!("[modal] #{OVERLAY_ID} not found; contact overlay disabled");
    }

    ModalWiring {
        _listeners: listeners,
        _state: state,
    }
}

pub fn handle_key(engine: &Rc<RefCell<EffectsEngine>>, key: &str) -> bool {
    engine.borrow().modal().key(KeyAction::from_key(key))
}
