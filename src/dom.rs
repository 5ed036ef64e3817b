use crate::constants::{CONFIG_ATTR_PREFIX, ROLE_ATTR};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. Dropping the guard detaches it, so every
/// subscription to a host event has a matching unsubscribe on every exit
/// path, including early teardown.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[dom] could not listen for {event}: {e:?}");
                None
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(&web::Event) + 'static,
) -> Option<ListenerGuard> {
    let el = document.get_element_by_id(element_id)?;
    ListenerGuard::attach(&el, "click", move |ev| handler(&ev))
}

/// Every element carrying a `data-glint` role list, in document order.
pub fn role_elements(document: &web::Document) -> Vec<(web::HtmlElement, input::Roles)> {
    let Ok(nodes) = document.query_selector_all(&format!("[{ROLE_ATTR}]")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let roles = input::Roles::parse(&el.get_attribute(ROLE_ATTR).unwrap_or_default());
            (el, roles)
        })
        .collect()
}

/// `(key, value)` config overrides from `data-glint-*` attributes on `<body>`.
pub fn config_overrides(document: &web::Document) -> Vec<(String, String)> {
    let Some(body) = document.body() else {
        return Vec::new();
    };
    let dataset = body.dataset();
    let keys = js_sys::Object::keys(&dataset);
    keys.iter()
        .filter_map(|k| k.as_string())
        .filter_map(|k| {
            let key = input::override_key(&k, CONFIG_ATTR_PREFIX)?;
            let value = dataset.get(&k)?;
            Some((key, value))
        })
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_size(window: &web::Window) -> Option<(f32, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

pub fn scroll_progress_inputs(window: &web::Window) -> Option<(f32, f32)> {
    let document = window.document()?;
    let root = document.document_element()?;
    let viewport_h = window.inner_height().ok()?.as_f64()?;
    let top = window.scroll_y().ok()? as f32;
    Some((top, input::scroll_range(root.scroll_height() as f64, viewport_h)))
}

/// Resolves once the document has finished parsing, so role queries see
/// every element.
pub async fn document_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = document.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
