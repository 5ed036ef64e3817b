// One-shot reveal for cards scrolling into view: each card fades in and rises
// into place the first time its box enters the viewport (shrunk by a margin),
// delayed by its index so a row of cards arrives one after another. Once
// fired, a reveal never re-hides.

use crate::constants::*;
use crate::error::ConfigError;
use crate::geometry::WidgetGeometry;
use crate::motion::{positive, Easing};
use crate::viewport::ViewportSignal;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub margin_px: f32,
    pub travel_px: f32,
    pub stagger_secs: f32,
    pub duration_secs: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin_px: REVEAL_MARGIN_PX,
            travel_px: REVEAL_TRAVEL_PX,
            stagger_secs: REVEAL_STAGGER_SECS,
            duration_secs: REVEAL_DURATION_SECS,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("reveal.duration_secs", self.duration_secs)?;
        if !(self.stagger_secs.is_finite() && self.stagger_secs >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "reveal.stagger_secs",
                value: self.stagger_secs,
                min: 0.0,
                max: f32::INFINITY,
            });
        }
        if !(self.margin_px.is_finite() && self.travel_px.is_finite()) {
            return Err(ConfigError::NotPositive {
                field: "reveal.margin_px",
                value: self.margin_px,
            });
        }
        Ok(())
    }

    /// Delay before card `index` starts moving once it has fired.
    pub fn delay_secs(&self, index: u32) -> f32 {
        index as f32 * self.stagger_secs
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    pub opacity: f32,
    /// Downward offset from the resting position.
    pub offset_y_px: f32,
}

impl RevealState {
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            opacity: 0.0,
            offset_y_px: config.travel_px,
        }
    }

    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y_px: 0.0,
    };
}

/// True when `geometry` overlaps the viewport shrunk by `margin_px` on every
/// side. Unmeasured boxes are never in view.
pub fn in_view(
    geometry: Option<WidgetGeometry>,
    viewport: ViewportSignal,
    margin_px: f32,
) -> bool {
    let Some(g) = geometry.filter(WidgetGeometry::is_measured) else {
        return false;
    };
    let (w, h) = (viewport.width(), viewport.height());
    g.top < h - margin_px
        && g.top + g.height > margin_px
        && g.left < w - margin_px
        && g.left + g.width > margin_px
}

/// Eased progress of a fired reveal `elapsed_secs` after it fired.
pub fn reveal_progress(elapsed_secs: f32, config: &RevealConfig, index: u32) -> f32 {
    let t = (elapsed_secs - config.delay_secs(index)) / config.duration_secs;
    Easing::EaseInOut.apply(t)
}

/// Per-card latch. Fires on the first in-view observation and stays fired.
#[derive(Clone, Debug)]
pub struct RevealLatch {
    index: u32,
    fired_at: Option<Instant>,
}

impl RevealLatch {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            fired_at: None,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_fired(&self) -> bool {
        self.fired_at.is_some()
    }

    /// Record one visibility observation. Returns true only on the
    /// observation that fires the latch.
    pub fn observe(&mut self, visible: bool, now: Instant) -> bool {
        if self.fired_at.is_some() || !visible {
            return false;
        }
        self.fired_at = Some(now);
        true
    }

    pub fn state(&self, now: Instant, config: &RevealConfig) -> RevealState {
        let Some(fired) = self.fired_at else {
            return RevealState::hidden(config);
        };
        let elapsed = if now > fired {
            now.duration_since(fired).as_secs_f32()
        } else {
            0.0
        };
        let p = reveal_progress(elapsed, config, self.index);
        RevealState {
            opacity: p,
            offset_y_px: config.travel_px * (1.0 - p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_ignores_out_of_view_observations() {
        let mut latch = RevealLatch::new(0);
        let now = Instant::now();
        assert!(!latch.observe(false, now));
        assert!(!latch.is_fired());
        assert!(latch.observe(true, now));
        assert!(!latch.observe(true, now));
    }

    #[test]
    fn progress_waits_for_stagger() {
        let cfg = RevealConfig::default();
        assert_eq!(reveal_progress(0.3, &cfg, 2), 0.0);
        assert_eq!(reveal_progress(1.5, &cfg, 2), 1.0);
    }
}
