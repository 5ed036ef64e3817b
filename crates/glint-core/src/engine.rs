//! Ties the signal sources to the per-widget computers. The host feeds raw
//! input into the sources and calls [`EffectsEngine::frame`] once per
//! animation frame; widget outputs are recomputed only when something changed.

use crate::config::EffectsConfig;
use crate::constants::MAX_DRIFTERS;
use crate::error::ConfigError;
use crate::geometry::{MeasureGeometry, WidgetId};
use crate::glow::{GlowState, ProximityGlow};
use crate::modal::{ModalMachine, ModalState};
use crate::motion::{LoopAnimation, LoopController, LoopFrame, LoopId};
use crate::pointer::PointerSource;
use crate::reveal::{in_view, RevealLatch, RevealState};
use crate::scroll::ScrollSource;
use crate::signal::{ChangeTracker, Subscription};
use crate::spotlight::{halo_shift, spotlight_origin};
use crate::tilt::{compute_tilt, TiltConfig, TiltState, TiltVariant};
use crate::viewport::ViewportSource;
use fnv::FnvHashMap;
use glam::Vec2;
use instant::Instant;
use smallvec::{smallvec, SmallVec};
use std::cell::Cell;
use std::rc::Rc;

/// Which tilt flavour a widget uses. Hover gating for `Widget` comes from the
/// widget's own hover flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltMode {
    Viewport,
    Widget,
}

#[derive(Clone, Debug)]
struct TiltSlot {
    mode: TiltMode,
    config: TiltConfig,
    state: TiltState,
}

#[derive(Clone, Debug)]
struct RevealSlot {
    latch: RevealLatch,
    last: Option<RevealState>,
}

#[derive(Clone, Debug, Default)]
struct WidgetEffects {
    glow: Option<ProximityGlow>,
    tilt: Option<TiltSlot>,
    reveal: Option<RevealSlot>,
    hovered: bool,
    hover_loop: Option<LoopId>,
}

/// Loops every page gets.
#[derive(Clone, Debug)]
pub struct PageLoops {
    pub marquee: LoopId,
    pub scroll_hint: LoopId,
    pub gradient_sweep: LoopId,
    pub drifters: SmallVec<[LoopId; 4]>,
}

/// Pointer- and scroll-driven values that are not tied to a widget box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFrame {
    pub spotlight_origin: Option<Vec2>,
    pub halo_shift: Vec2,
    pub parallax_px: f32,
}

/// Everything that changed this frame.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub glows: SmallVec<[(WidgetId, GlowState); 8]>,
    pub tilts: SmallVec<[(WidgetId, TiltState); 8]>,
    pub reveals: SmallVec<[(WidgetId, RevealState); 8]>,
    pub loops: SmallVec<[(LoopId, LoopFrame); 8]>,
    pub page: Option<PageFrame>,
    pub modal: ModalState,
}

pub struct EffectsEngine {
    config: EffectsConfig,
    pointer: PointerSource,
    viewport: ViewportSource,
    scroll: ScrollSource,
    modal: ModalMachine,
    loops: LoopController,
    page_loops: PageLoops,
    widgets: FnvHashMap<WidgetId, WidgetEffects>,
    dirty: Rc<Cell<bool>>,
    page_trackers: [ChangeTracker; 3],
    _subscriptions: SmallVec<[Subscription; 3]>,
}

impl EffectsEngine {
    pub fn new(config: EffectsConfig) -> Self {
        let pointer = PointerSource::new();
        let viewport = ViewportSource::new();
        let scroll = ScrollSource::new();
        let dirty = Rc::new(Cell::new(true));

        let subscriptions: SmallVec<[Subscription; 3]> = smallvec![
            pointer.signal().subscribe(mark_dirty(&dirty)),
            viewport.signal().subscribe(mark_dirty(&dirty)),
            scroll.signal().subscribe(mark_dirty(&dirty)),
        ];

        let mut loops = LoopController::new();
        let page_loops = PageLoops {
            marquee: loops.add(LoopAnimation::new(config.marquee)),
            scroll_hint: loops.add(LoopAnimation::new(config.scroll_hint)),
            gradient_sweep: loops.add(LoopAnimation::new(config.gradient_sweep)),
            drifters: loops
                .spawn_drifters(config.drifter_count.min(MAX_DRIFTERS), config.drifter_seed),
        };
        log::info!(
            "[engine] loops={} glow_radius={:.0}px card_tilt_max={:.0}deg",
            loops.len(),
            config.glow.falloff_radius_px,
            config.card_tilt.max_deg
        );

        Self {
            config,
            pointer,
            viewport,
            scroll,
            modal: ModalMachine::new(),
            loops,
            page_loops,
            widgets: FnvHashMap::default(),
            dirty,
            page_trackers: [ChangeTracker::default(); 3],
            _subscriptions: subscriptions,
        }
    }

    /// Like [`new`](Self::new) but rejects an invalid config up front.
    pub fn try_new(config: EffectsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerSource {
        &self.pointer
    }

    pub fn viewport(&self) -> &ViewportSource {
        &self.viewport
    }

    pub fn scroll(&self) -> &ScrollSource {
        &self.scroll
    }

    pub fn modal(&self) -> &ModalMachine {
        &self.modal
    }

    pub fn loops(&self) -> &LoopController {
        &self.loops
    }

    pub fn page_loops(&self) -> &PageLoops {
        &self.page_loops
    }

    pub fn register_glow(&mut self, id: WidgetId) {
        let config = self.config.glow;
        self.widgets.entry(id).or_default().glow = Some(ProximityGlow::new(config));
        self.dirty.set(true);
    }

    pub fn register_tilt(&mut self, id: WidgetId, mode: TiltMode) {
        let config = match mode {
            TiltMode::Viewport => self.config.profile_tilt,
            TiltMode::Widget => self.config.card_tilt,
        };
        self.widgets.entry(id).or_default().tilt = Some(TiltSlot {
            mode,
            config,
            state: TiltState::ZERO,
        });
        self.dirty.set(true);
    }

    /// Reveal `id` the first time it scrolls into view. `index` sets its
    /// place in the stagger.
    pub fn register_reveal(&mut self, id: WidgetId, index: u32) {
        self.widgets.entry(id).or_default().reveal = Some(RevealSlot {
            latch: RevealLatch::new(index),
            last: None,
        });
        self.dirty.set(true);
    }

    /// Let hover on `id` drive the speed of `loop_id`.
    pub fn bind_hover_loop(&mut self, id: WidgetId, loop_id: LoopId) {
        let widget = self.widgets.entry(id).or_default();
        widget.hover_loop = Some(loop_id);
        let hovered = widget.hovered;
        self.loops.set_hovered(loop_id, hovered);
    }

    pub fn set_hover(&mut self, id: WidgetId, hovered: bool) {
        let Some(widget) = self.widgets.get_mut(&id) else {
            return;
        };
        if widget.hovered == hovered {
            return;
        }
        widget.hovered = hovered;
        if let Some(loop_id) = widget.hover_loop {
            self.loops.set_hovered(loop_id, hovered);
        }
        self.dirty.set(true);
    }

    pub fn is_hovered(&self, id: WidgetId) -> bool {
        self.widgets.get(&id).is_some_and(|w| w.hovered)
    }

    /// Teardown: forget the widget and release any loop speed it was holding.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        match self.widgets.remove(&id) {
            Some(widget) => {
                if let (Some(loop_id), true) = (widget.hover_loop, widget.hovered) {
                    self.loops.set_hovered(loop_id, false);
                }
                true
            }
            None => false,
        }
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Layout moved without any signal changing (fonts loaded, images sized).
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    pub fn glow(&self, id: WidgetId) -> GlowState {
        self.widgets
            .get(&id)
            .and_then(|w| w.glow.as_ref())
            .map(ProximityGlow::state)
            .unwrap_or_default()
    }

    pub fn tilt(&self, id: WidgetId) -> TiltState {
        self.widgets
            .get(&id)
            .and_then(|w| w.tilt.as_ref())
            .map(|t| t.state)
            .unwrap_or_default()
    }

    pub fn reveal(&self, id: WidgetId) -> Option<RevealState> {
        self.widgets
            .get(&id)
            .and_then(|w| w.reveal.as_ref())
            .and_then(|r| r.last)
    }

    pub fn frame(&mut self, now: Instant, measure: &impl MeasureGeometry) -> FrameReport {
        self.loops.tick(now);
        let mut report = FrameReport {
            loops: self.loops.frames(),
            page: self.page_frame(),
            modal: self.modal.state(),
            ..Default::default()
        };
        if self.dirty.replace(false) {
            self.recompute_widgets(measure, now, &mut report);
        }
        self.animate_reveals(now, &mut report);
        report
    }

    fn page_frame(&mut self) -> Option<PageFrame> {
        let [p, v, s] = &mut self.page_trackers;
        let pointer_changed = p.take_changed(&self.pointer.signal());
        let viewport_changed = v.take_changed(&self.viewport.signal());
        let scroll_changed = s.take_changed(&self.scroll.signal());
        if !(pointer_changed || viewport_changed || scroll_changed) {
            return None;
        }
        let pointer = self.pointer.read();
        Some(PageFrame {
            spotlight_origin: spotlight_origin(pointer),
            halo_shift: halo_shift(pointer, self.viewport.read()),
            parallax_px: self.config.parallax.offset(self.scroll.read()),
        })
    }

    fn recompute_widgets(
        &mut self,
        measure: &impl MeasureGeometry,
        now: Instant,
        report: &mut FrameReport,
    ) {
        let pointer = self.pointer.read();
        let viewport = self.viewport.read();
        let margin = self.config.reveal.margin_px;
        for (id, widget) in self.widgets.iter_mut() {
            let needs_box = widget.glow.is_some()
                || matches!(&widget.tilt, Some(t) if t.mode == TiltMode::Widget)
                || matches!(&widget.reveal, Some(r) if !r.latch.is_fired());
            let geometry = if needs_box { measure.measure(*id) } else { None };

            if let Some(slot) = widget.reveal.as_mut() {
                if slot.latch.observe(in_view(geometry, viewport, margin), now) {
                    log::debug!("[reveal] widget={} index={}", id.0, slot.latch.index());
                }
            }

            if let Some(glow) = widget.glow.as_mut() {
                if glow.update(pointer, geometry) {
                    report.glows.push((*id, glow.state()));
                }
            }
            if let Some(slot) = widget.tilt.as_mut() {
                let variant = match slot.mode {
                    TiltMode::Viewport => TiltVariant::ViewportRelative,
                    TiltMode::Widget => TiltVariant::WidgetRelative {
                        hover_active: widget.hovered,
                    },
                };
                let next = compute_tilt(variant, pointer, viewport, geometry, &slot.config);
                if next != slot.state {
                    slot.state = next;
                    report.tilts.push((*id, next));
                }
            }
        }
        report.glows.sort_by_key(|(id, _)| *id);
        report.tilts.sort_by_key(|(id, _)| *id);
    }

    /// Fired reveals animate on the frame clock, independent of signals.
    fn animate_reveals(&mut self, now: Instant, report: &mut FrameReport) {
        let config = self.config.reveal;
        for (id, widget) in self.widgets.iter_mut() {
            let Some(slot) = widget.reveal.as_mut() else {
                continue;
            };
            let state = slot.latch.state(now, &config);
            if slot.last != Some(state) {
                slot.last = Some(state);
                report.reveals.push((*id, state));
            }
        }
        report.reveals.sort_by_key(|(id, _)| *id);
    }
}

fn mark_dirty<T: 'static>(dirty: &Rc<Cell<bool>>) -> impl FnMut(T) + 'static {
    let dirty = Rc::clone(dirty);
    move |_| dirty.set(true)
}

impl Default for EffectsEngine {
    fn default() -> Self {
        Self::new(EffectsConfig::default())
    }
}
