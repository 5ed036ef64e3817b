#![cfg(target_arch = "wasm32")]
use glint_core::{EffectsConfig, EffectsEngine, TiltMode, WidgetId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod modal;
mod style;

/// Everything that keeps the effects alive. Dropping it detaches every
/// listener and stops the frame loop.
struct App {
    engine: Rc<RefCell<EffectsEngine>>,
    _frame_loop: frame::LoopHandle,
    _signals: Vec<dom::ListenerGuard>,
    _hover: Vec<dom::ListenerGuard>,
    _keydown: Option<dom::ListenerGuard>,
    _modal: modal::ModalWiring,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glint-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Detach all listeners and stop animating. Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|a| a.borrow_mut().take());
    if app.is_some() {
        log::info!("[app] teardown");
    }
    drop(app);
}

/// Re-measure widgets on the next frame; for layout changes the page makes
/// without resizing or scrolling.
#[wasm_bindgen]
pub fn refresh_layout() {
    APP.with(|a| {
        if let Some(app) = a.borrow().as_ref() {
            app.engine.borrow().invalidate();
        }
    });
}

fn load_config(document: &web::Document) -> EffectsConfig {
    let mut config = EffectsConfig::default();
    let overrides = dom::config_overrides(document);
    for err in config.apply_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()))) {
        log::warn!("[config] override rejected: {err}");
    }
    config
}

struct Layout {
    widgets: Vec<frame::WidgetHandle>,
    loop_targets: Vec<frame::LoopTarget>,
    page: frame::PageElements,
}

fn register_elements(document: &web::Document, engine: &mut EffectsEngine) -> Layout {
    let loops = engine.page_loops().clone();
    let mut layout = Layout {
        widgets: Vec::new(),
        loop_targets: Vec::new(),
        page: frame::PageElements::default(),
    };
    let mut next_id = 0u32;
    let mut drifters = 0usize;
    let mut reveals = 0u32;

    for (el, roles) in dom::role_elements(document) {
        if roles.is_widget() {
            let id = WidgetId(next_id);
            next_id += 1;
            if roles.glow {
                engine.register_glow(id);
            }
            if roles.tilt_card {
                engine.register_tilt(id, TiltMode::Widget);
            } else if roles.tilt_viewport {
                engine.register_tilt(id, TiltMode::Viewport);
            }
            if roles.marquee {
                engine.bind_hover_loop(id, loops.marquee);
            }
            if roles.reveal {
                engine.register_reveal(id, reveals);
                reveals += 1;
            }
            layout.widgets.push(frame::WidgetHandle::new(id, el.clone(), roles));
        }

        let mut bind = |loop_id, role| {
            layout.loop_targets.push(frame::LoopTarget {
                loop_id,
                role,
                element: el.clone(),
            });
        };
        if roles.marquee {
            bind(loops.marquee, frame::LoopRole::Marquee);
        }
        if roles.scroll_hint {
            bind(loops.scroll_hint, frame::LoopRole::ScrollHint);
        }
        if roles.gradient {
            bind(loops.gradient_sweep, frame::LoopRole::Gradient);
        }
        if roles.drifter {
            if loops.drifters.is_empty() {
                log::warn!("[app] drifter element found but drifter-count is 0");
            } else {
                let loop_id = loops.drifters[drifters % loops.drifters.len()];
                bind(loop_id, frame::LoopRole::Drifter(drifters));
                drifters += 1;
            }
        }

        if roles.spotlight {
            layout.page.spotlights.push(el.clone());
        }
        if roles.halo {
            layout.page.halos.push(el.clone());
        }
        if roles.parallax {
            layout.page.parallax.push(el);
        }
    }
    layout
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    let config = load_config(&document);
    let engine = match EffectsEngine::try_new(config) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            EffectsEngine::default()
        }
    };
    let engine = Rc::new(RefCell::new(engine));

    let Layout {
        widgets,
        loop_targets,
        page,
    } = register_elements(&document, &mut engine.borrow_mut());
    log::info!(
        "[app] widgets={} loop_targets={} spotlights={}",
        widgets.len(),
        loop_targets.len(),
        page.spotlights.len()
    );

    let signals = events::wire_signals(&window, &engine);
    let hover = events::wire_hover(&widgets, &engine);
    let keydown = events::wire_keydown(&window, &engine);
    let modal = modal::wire(&document, &engine);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine.clone(),
        widgets,
        loop_targets,
        page,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    let previous = APP.with(|a| {
        a.borrow_mut().replace(App {
            engine,
            _frame_loop: frame_loop,
            _signals: signals,
            _hover: hover,
            _keydown: keydown,
            _modal: modal,
        })
    });
    // a second start replaces the first without leaking its listeners
    drop(previous);
    Ok(())
}
