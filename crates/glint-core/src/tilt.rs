// Pitch is negative when the pointer is above the reference center, yaw is
// positive to the right. `rotateX` in the front-end negates pitch.

use crate::constants::*;
use crate::geometry::WidgetGeometry;
use crate::pointer::PointerSignal;
use crate::viewport::ViewportSignal;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltVariant {
    ViewportRelative,
    WidgetRelative { hover_active: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Degrees at the viewport edge (viewport-relative flavour).
    pub sensitivity_deg: f32,
    /// Pixels of pointer offset per degree (widget-relative flavour).
    pub divisor_px: f32,
    /// Both axes are clamped to `[-max_deg, max_deg]`.
    pub max_deg: f32,
}

impl TiltConfig {
    pub const PROFILE: Self = Self {
        sensitivity_deg: PROFILE_TILT_SENSITIVITY_DEG,
        divisor_px: CARD_TILT_DIVISOR_PX,
        max_deg: PROFILE_TILT_SENSITIVITY_DEG,
    };

    pub const CARD: Self = Self {
        sensitivity_deg: PROFILE_TILT_SENSITIVITY_DEG,
        divisor_px: CARD_TILT_DIVISOR_PX,
        max_deg: CARD_TILT_MAX_DEG,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl TiltState {
    pub const ZERO: Self = Self {
        pitch_deg: 0.0,
        yaw_deg: 0.0,
    };

    fn clamped(raw: Vec2, max_deg: f32) -> Self {
        let max = max_deg.abs();
        let clamp = |v: f32| if v.is_finite() { v.clamp(-max, max) } else { 0.0 };
        Self {
            pitch_deg: clamp(raw.y),
            yaw_deg: clamp(raw.x),
        }
    }
}

pub fn compute_tilt(
    variant: TiltVariant,
    pointer: Option<PointerSignal>,
    viewport: ViewportSignal,
    geometry: Option<WidgetGeometry>,
    config: &TiltConfig,
) -> TiltState {
    let Some(pointer) = pointer else {
        return TiltState::ZERO;
    };
    let p = pointer.as_vec2();
    match variant {
        TiltVariant::ViewportRelative => {
            let half = viewport.half_extents();
            let normalized = (p - viewport.center()) / half;
            TiltState::clamped(normalized * config.sensitivity_deg, config.max_deg)
        }
        TiltVariant::WidgetRelative { hover_active } => {
            if !hover_active || config.divisor_px <= 0.0 {
                return TiltState::ZERO;
            }
            match geometry {
                Some(g) if g.is_measured() => {
                    let offset = p - g.center();
                    TiltState::clamped(offset / config.divisor_px, config.max_deg)
                }
                _ => TiltState::ZERO,
            }
        }
    }
}
