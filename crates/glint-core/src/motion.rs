// Loops keep a phase in [0, 1); hover changes the rate, never the phase.

use crate::constants::*;
use crate::error::ConfigError;
use fnv::FnvHashMap;
use instant::Instant;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out.
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// How one cycle maps phase to output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatMode {
    /// 0 → 1, then restart from 0.
    Loop,
    /// 0 → 1 → 0 within one cycle.
    Mirror,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopSpec {
    pub base_duration_secs: f32,
    pub hover_multiplier: f32,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl LoopSpec {
    pub const MARQUEE: Self = Self {
        base_duration_secs: MARQUEE_BASE_SECS,
        hover_multiplier: MARQUEE_HOVER_MULTIPLIER,
        easing: Easing::Linear,
        repeat: RepeatMode::Loop,
    };

    pub const SCROLL_HINT: Self = Self {
        base_duration_secs: SCROLL_HINT_SECS,
        hover_multiplier: 1.0,
        easing: Easing::EaseInOut,
        repeat: RepeatMode::Mirror,
    };

    pub const GRADIENT_SWEEP: Self = Self {
        base_duration_secs: GRADIENT_SWEEP_SECS,
        hover_multiplier: 1.0,
        easing: Easing::EaseInOut,
        repeat: RepeatMode::Mirror,
    };

    pub fn new(
        base_duration_secs: f32,
        hover_multiplier: f32,
        easing: Easing,
        repeat: RepeatMode,
    ) -> Result<Self, ConfigError> {
        let spec = Self {
            base_duration_secs,
            hover_multiplier,
            easing,
            repeat,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("base_duration_secs", self.base_duration_secs)?;
        positive("hover_multiplier", self.hover_multiplier)?;
        Ok(())
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// What the presentation layer needs for one loop on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopFrame {
    pub phase: f32,
    /// Eased output in `[0, 1]`.
    pub value: f32,
    pub current_duration_secs: f32,
}

#[derive(Clone, Debug)]
pub struct LoopAnimation {
    spec: LoopSpec,
    phase: f32,
    hovered: bool,
}

impl LoopAnimation {
    pub fn new(spec: LoopSpec) -> Self {
        Self::with_phase(spec, 0.0)
    }

    pub fn with_phase(spec: LoopSpec, phase: f32) -> Self {
        Self {
            spec,
            phase: wrap_phase(phase),
            hovered: false,
        }
    }

    pub fn spec(&self) -> &LoopSpec {
        &self.spec
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Swap the effective duration; the phase is left untouched.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn effective_duration_secs(&self) -> f32 {
        let base = self.spec.base_duration_secs;
        if self.hovered {
            base * self.spec.hover_multiplier
        } else {
            base
        }
    }

    pub fn advance(&mut self, dt_secs: f32) {
        let duration = self.effective_duration_secs();
        if !(dt_secs.is_finite() && dt_secs > 0.0 && duration > 0.0) {
            return;
        }
        self.phase = wrap_phase(self.phase + dt_secs / duration);
    }

    pub fn sample(&self) -> f32 {
        let t = match self.spec.repeat {
            RepeatMode::Loop => self.phase,
            RepeatMode::Mirror => 1.0 - (2.0 * self.phase - 1.0).abs(),
        };
        self.spec.easing.apply(t)
    }

    pub fn frame(&self) -> LoopFrame {
        LoopFrame {
            phase: self.phase,
            value: self.sample(),
            current_duration_secs: self.effective_duration_secs(),
        }
    }
}

#[inline]
fn wrap_phase(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let p = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(pub u32);

/// Registry of running loops driven by the host's frame clock.
///
/// If the host stops delivering ticks the loops simply stay at their last
/// phase; nothing else depends on them.
#[derive(Debug, Default)]
pub struct LoopController {
    loops: FnvHashMap<LoopId, LoopAnimation>,
    next_id: u32,
    last_tick: Option<Instant>,
}

impl LoopController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, animation: LoopAnimation) -> LoopId {
        let id = LoopId(self.next_id);
        self.next_id += 1;
        self.loops.insert(id, animation);
        id
    }

    pub fn remove(&mut self, id: LoopId) -> Option<LoopAnimation> {
        self.loops.remove(&id)
    }

    pub fn get(&self, id: LoopId) -> Option<&LoopAnimation> {
        self.loops.get(&id)
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    pub fn set_hovered(&mut self, id: LoopId, hovered: bool) {
        if let Some(anim) = self.loops.get_mut(&id) {
            if anim.is_hovered() != hovered {
                anim.set_hovered(hovered);
                log::debug!(
                    "[loop] {:?} hover={} duration={:.2}s",
                    id,
                    hovered,
                    anim.effective_duration_secs()
                );
            }
        }
    }

    /// Advance every loop by the wall time since the previous tick. The first
    /// tick only records the clock.
    pub fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick {
            // a clock that steps backwards counts as no time passing
            Some(prev) if now > prev => now.duration_since(prev),
            _ => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.step(dt);
    }

    /// Advance by an explicit step, capped to `MAX_FRAME_STEP_SECS`.
    pub fn step(&mut self, dt: Duration) {
        let dt_secs = dt.as_secs_f32().min(MAX_FRAME_STEP_SECS);
        for anim in self.loops.values_mut() {
            anim.advance(dt_secs);
        }
    }

    pub fn frame(&self, id: LoopId) -> Option<LoopFrame> {
        self.loops.get(&id).map(LoopAnimation::frame)
    }

    /// All frames ordered by id.
    pub fn frames(&self) -> SmallVec<[(LoopId, LoopFrame); 8]> {
        let mut out: SmallVec<[(LoopId, LoopFrame); 8]> =
            self.loops.iter().map(|(id, a)| (*id, a.frame())).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Add `count` drifting background shapes with seeded, staggered phases
    /// and durations so they never move in lockstep.
    pub fn spawn_drifters(&mut self, count: usize, seed: u64) -> SmallVec<[LoopId; 4]> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let spec = LoopSpec {
                    base_duration_secs: rng.gen_range(DRIFTER_MIN_SECS..DRIFTER_MAX_SECS),
                    hover_multiplier: 1.0,
                    easing: Easing::EaseInOut,
                    repeat: RepeatMode::Mirror,
                };
                let phase: f32 = rng.gen();
                self.add(LoopAnimation::with_phase(spec, phase))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_hits_endpoints_and_midpoint() {
        assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mirror_returns_to_start() {
        let mut a = LoopAnimation::new(LoopSpec::SCROLL_HINT);
        assert_eq!(a.sample(), 0.0);
        a.advance(0.75);
        assert!((a.sample() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = LoopSpec::new(0.0, 1.0, Easing::Linear, RepeatMode::Loop).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "base_duration_secs",
                ..
            }
        ));
    }
}
