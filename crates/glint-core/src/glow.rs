use crate::constants::*;
use crate::geometry::WidgetGeometry;
use crate::pointer::PointerSignal;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowConfig {
    pub falloff_radius_px: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            falloff_radius_px: GLOW_FALLOFF_RADIUS_PX,
        }
    }
}

/// Derived proximity glow for one widget.
///
/// `highlight` is the pointer relative to the widget's top-left corner and is
/// `None` when there is nothing meaningful to center a highlight on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowState {
    pub intensity: f32,
    pub highlight: Option<Vec2>,
}

impl GlowState {
    pub const NEUTRAL: Self = Self {
        intensity: 0.0,
        highlight: None,
    };
}

impl Default for GlowState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Linear falloff from 1 at the widget center to 0 at `falloff_radius_px`.
///
/// Pure: the result depends only on the arguments, there is no smoothing
/// between calls.
pub fn compute_glow(
    pointer: Option<PointerSignal>,
    geometry: Option<WidgetGeometry>,
    config: &GlowConfig,
) -> GlowState {
    let (Some(pointer), Some(geometry)) = (pointer, geometry) else {
        return GlowState::NEUTRAL;
    };
    if !geometry.is_measured() {
        return GlowState::NEUTRAL;
    }
    let p = pointer.as_vec2();
    let distance = p.distance(geometry.center());
    GlowState {
        intensity: falloff(distance, config.falloff_radius_px),
        highlight: Some(geometry.relative(p)),
    }
}

#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Per-widget glow computer. Holds only the most recent result so the
/// presentation layer can skip style writes when nothing changed.
#[derive(Clone, Debug, Default)]
pub struct ProximityGlow {
    pub config: GlowConfig,
    state: GlowState,
}

impl ProximityGlow {
    pub fn new(config: GlowConfig) -> Self {
        Self {
            config,
            state: GlowState::NEUTRAL,
        }
    }

    /// Recompute; returns true if the state differs from the previous one.
    pub fn update(
        &mut self,
        pointer: Option<PointerSignal>,
        geometry: Option<WidgetGeometry>,
    ) -> bool {
        let next = compute_glow(pointer, geometry, &self.config);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn state(&self) -> GlowState {
        self.state
    }
}

/// Numbers the card styling derives from a glow intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStyle {
    pub shadow_blur_px: f32,
    pub shadow_alpha: f32,
    pub inset_blur_px: f32,
    pub border_alpha: f32,
    pub highlight_opacity: f32,
    /// Top-left of the highlight disc, relative to the widget.
    pub highlight_origin: Option<Vec2>,
}

impl GlowStyle {
    pub fn from_state(state: &GlowState) -> Self {
        let g = state.intensity;
        let radius = GLOW_HIGHLIGHT_DIAMETER_PX * 0.5;
        Self {
            shadow_blur_px: GLOW_SHADOW_BLUR_BASE_PX + GLOW_SHADOW_BLUR_SPAN_PX * g,
            shadow_alpha: GLOW_SHADOW_ALPHA_BASE + GLOW_SHADOW_ALPHA_SPAN * g,
            inset_blur_px: GLOW_INSET_BLUR_SPAN_PX * g,
            border_alpha: GLOW_BORDER_ALPHA_BASE + GLOW_BORDER_ALPHA_SPAN * g,
            highlight_opacity: GLOW_HIGHLIGHT_OPACITY_SPAN * g,
            highlight_origin: state.highlight.map(|h| h - Vec2::splat(radius)),
        }
    }
}
