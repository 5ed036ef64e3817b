use crate::constants::HIGHLIGHT_ATTR;
use crate::dom::set_style;
use crate::input::{self, Roles};
use crate::style;
use fnv::FnvHashMap;
use glint_core::{EffectsEngine, FrameReport, LoopFrame, LoopId, PageFrame, WidgetGeometry, WidgetId};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WidgetHandle {
    pub id: WidgetId,
    pub element: web::HtmlElement,
    pub roles: Roles,
    pub highlight: Option<web::HtmlElement>,
}

impl WidgetHandle {
    pub fn new(id: WidgetId, element: web::HtmlElement, roles: Roles) -> Self {
        let highlight = element
            .query_selector(&format!("[{HIGHLIGHT_ATTR}]"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        Self {
            id,
            element,
            roles,
            highlight,
        }
    }

    /// Fresh bounding box; never cached because layout can shift any frame.
    pub fn measure(&self) -> WidgetGeometry {
        input::geometry_from_rect(&self.element.get_bounding_client_rect())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LoopRole {
    Marquee,
    ScrollHint,
    Gradient,
    Drifter(usize),
}

pub struct LoopTarget {
    pub loop_id: LoopId,
    pub role: LoopRole,
    pub element: web::HtmlElement,
}

/// Elements driven by page-level values rather than a widget box.
#[derive(Default)]
pub struct PageElements {
    pub spotlights: Vec<web::HtmlElement>,
    pub halos: Vec<web::HtmlElement>,
    pub parallax: Vec<web::HtmlElement>,
}

pub struct FrameContext {
    pub engine: Rc<RefCell<EffectsEngine>>,
    pub widgets: Vec<WidgetHandle>,
    pub index: FnvHashMap<WidgetId, usize>,
    pub loop_targets: Vec<LoopTarget>,
    pub page: PageElements,
}

impl FrameContext {
    pub fn new(
        engine: Rc<RefCell<EffectsEngine>>,
        widgets: Vec<WidgetHandle>,
        loop_targets: Vec<LoopTarget>,
        page: PageElements,
    ) -> Self {
        let index = widgets.iter().enumerate().map(|(i, w)| (w.id, i)).collect();
        Self {
            engine,
            widgets,
            index,
            loop_targets,
            page,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let report = {
            let widgets = &self.widgets;
            let index = &self.index;
            let measure =
                |id: WidgetId| index.get(&id).map(|&i| widgets[i].measure());
            self.engine.borrow_mut().frame(now, &measure)
        };
        self.apply(&report);
    }

    fn apply(&self, report: &FrameReport) {
        for (id, glow) in &report.glows {
            let Some(w) = self.widget(*id) else {
                continue;
            };
            let (shadow, border) = style::glow_card(glow);
            set_style(&w.element, "box-shadow", &shadow);
            set_style(&w.element, "border-color", &border);
            if let Some(h) = &w.highlight {
                match style::glow_highlight(glow) {
                    Some((left, top, opacity)) => {
                        set_style(h, "left", &left);
                        set_style(h, "top", &top);
                        set_style(h, "opacity", &opacity);
                    }
                    None => set_style(h, "opacity", "0"),
                }
            }
        }
        for (id, tilt) in &report.tilts {
            if let Some(w) = self.widget(*id) {
                set_style(&w.element, "transform", &style::tilt_transform(tilt));
            }
        }
        for (id, reveal) in &report.reveals {
            if let Some(w) = self.widget(*id) {
                let (opacity, transform) = style::reveal_style(reveal);
                set_style(&w.element, "opacity", &opacity);
                // tilting cards own `transform`; they only fade
                if !(w.roles.tilt_card || w.roles.tilt_viewport) {
                    set_style(&w.element, "transform", &transform);
                }
            }
        }
        for target in &self.loop_targets {
            if let Some((_, frame)) = report.loops.iter().find(|(id, _)| *id == target.loop_id) {
                apply_loop(target, frame);
            }
        }
        if let Some(page) = &report.page {
            self.apply_page(page);
        }
    }

    fn apply_page(&self, page: &PageFrame) {
        for el in &self.page.spotlights {
            match page.spotlight_origin {
                Some(origin) => {
                    set_style(el, "left", &style::px(origin.x));
                    set_style(el, "top", &style::px(origin.y));
                    set_style(el, "opacity", "1");
                }
                None => set_style(el, "opacity", "0"),
            }
        }
        for el in &self.page.halos {
            set_style(el, "transform", &style::translate(page.halo_shift));
        }
        for el in &self.page.parallax {
            set_style(el, "transform", &style::translate_y(page.parallax_px));
        }
    }

    fn widget(&self, id: WidgetId) -> Option<&WidgetHandle> {
        self.index.get(&id).map(|&i| &self.widgets[i])
    }
}

fn apply_loop(target: &LoopTarget, frame: &LoopFrame) {
    let el = &target.element;
    match target.role {
        LoopRole::Marquee => set_style(el, "transform", &style::marquee_transform(frame)),
        LoopRole::ScrollHint => set_style(el, "transform", &style::scroll_hint_transform(frame)),
        LoopRole::Gradient => {
            set_style(el, "background-position", &style::gradient_position(frame))
        }
        LoopRole::Drifter(i) => set_style(el, "transform", &style::drifter_transform(frame, i)),
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Dropping the handle cancels the
/// pending frame and releases the tick closure.
pub struct LoopHandle {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

fn request_frame(slot: &TickSlot, pending: &Cell<Option<i32>>) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let slot = slot.borrow();
    let Some(tick) = slot.as_ref() else {
        return false;
    };
    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => {
            pending.set(Some(id));
            true
        }
        Err(e) => {
            log::warn!("[frame] animation frames unavailable, effects frozen: {e:?}");
            pending.set(None);
            false
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let ctx = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));

    if !request_frame(&tick, &pending) {
        log::warn!("[frame] no animation scheduler; effects stay static");
        // one static frame so the page still shows neutral styles
        frame_ctx.borrow_mut().frame();
    }
    LoopHandle { tick, pending }
}
