use std::time::{Duration, Instant};

use glam::Vec2;
use glint_core::{EffectsEngine, FrameReport, HitRegion, KeyAction, WidgetId};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

mod layout;

use layout::DemoLayout;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
// The demo page scrolls through three window heights
const PAGE_HEIGHT_SCREENS: f32 = 3.0;
const LINE_SCROLL_PX: f32 = 40.0;

struct Harness {
    engine: EffectsEngine,
    layout: DemoLayout,
    cursor: Option<Vec2>,
    scroll_top: f32,
}

impl Harness {
    fn new(width: f32, height: f32) -> Self {
        let mut engine = EffectsEngine::default();
        DemoLayout::register(&mut engine);
        engine.viewport().resize(width, height);
        Self {
            engine,
            layout: DemoLayout::new(width, height),
            cursor: None,
            scroll_top: 0.0,
        }
    }

    fn resized(&mut self, width: f32, height: f32) {
        self.engine.viewport().resize(width, height);
        self.layout = DemoLayout::new(width, height);
        self.engine.invalidate();
        self.scrolled(0.0);
    }

    fn cursor_moved(&mut self, p: Option<Vec2>) {
        self.cursor = p;
        match p {
            Some(p) => self.engine.pointer().move_to(p.x, p.y),
            None => self.engine.pointer().leave(),
        }
        for (id, hovered) in self.layout.hovered(p) {
            self.engine.set_hover(id, hovered);
        }
    }

    fn scrolled(&mut self, delta_px: f32) {
        let range = self.layout.size.y * (PAGE_HEIGHT_SCREENS - 1.0);
        self.scroll_top = (self.scroll_top + delta_px).clamp(0.0, range);
        self.engine.scroll().update_from_offsets(self.scroll_top, range);
    }

    fn clicked(&self) {
        let modal = self.engine.modal();
        if !modal.is_open() {
            modal.request_open();
            return;
        }
        let region = match self.cursor {
            Some(p) if self.layout.modal_content_contains(p) => HitRegion::Content,
            _ => HitRegion::Backdrop,
        };
        modal.click(region);
    }

    fn key(&self, key: &Key) {
        let action = match key {
            Key::Named(NamedKey::Escape) => KeyAction::Escape,
            _ => KeyAction::Other,
        };
        self.engine.modal().key(action);
    }

    fn frame(&mut self) -> FrameReport {
        let layout = self.layout;
        self.engine.frame(Instant::now(), &|id: WidgetId| layout.geometry(id))
    }
}

fn log_report(report: &FrameReport) {
    for (id, glow) in &report.glows {
        log::info!("[glow] widget={} intensity={:.2}", id.0, glow.intensity);
    }
    for (id, tilt) in &report.tilts {
        log::info!(
            "[tilt] widget={} pitch={:.2} yaw={:.2}",
            id.0,
            tilt.pitch_deg,
            tilt.yaw_deg
        );
    }
    for (id, reveal) in &report.reveals {
        log::debug!("[reveal] widget={} opacity={:.2}", id.0, reveal.opacity);
    }
    if let Some(page) = &report.page {
        log::debug!(
            "[page] halo=({:.1},{:.1}) parallax={:.1}px",
            page.halo_shift.x,
            page.halo_shift.y,
            page.parallax_px
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("glint (native)")
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut harness = Harness::new(size.width as f32, size.height as f32);
    // Opening and closing is reported by the modal machine's own logging
    log::info!("click to open the contact modal, Escape to close");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                harness.resized(size.width as f32, size.height as f32)
            }
            WindowEvent::CursorMoved { position, .. } => {
                harness.cursor_moved(Some(Vec2::new(position.x as f32, position.y as f32)))
            }
            WindowEvent::CursorLeft { .. } => harness.cursor_moved(None),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                harness.scrolled(dy);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => harness.clicked(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => harness.key(&logical_key),
            _ => {}
        },
        Event::AboutToWait => {
            let report = harness.frame();
            log_report(&report);
            elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
        }
        _ => {}
    })?;
    Ok(())
}
