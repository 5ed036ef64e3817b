use crate::error::ConfigError;
use crate::glow::GlowConfig;
use crate::constants::MAX_DRIFTERS;
use crate::motion::{positive, LoopSpec};
use crate::reveal::RevealConfig;
use crate::scroll::ParallaxMap;
use crate::tilt::TiltConfig;

/// Every tunable of the engine, supplied at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub glow: GlowConfig,
    pub profile_tilt: TiltConfig,
    pub card_tilt: TiltConfig,
    pub marquee: LoopSpec,
    pub scroll_hint: LoopSpec,
    pub gradient_sweep: LoopSpec,
    pub parallax: ParallaxMap,
    pub reveal: RevealConfig,
    pub drifter_count: usize,
    pub drifter_seed: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            glow: GlowConfig::default(),
            profile_tilt: TiltConfig::PROFILE,
            card_tilt: TiltConfig::CARD,
            marquee: LoopSpec::MARQUEE,
            scroll_hint: LoopSpec::SCROLL_HINT,
            gradient_sweep: LoopSpec::GRADIENT_SWEEP,
            parallax: ParallaxMap::default(),
            reveal: RevealConfig::default(),
            drifter_count: 2,
            drifter_seed: 42,
        }
    }
}

const MAX_TILT_DEG: f32 = 90.0;

impl EffectsConfig {
    pub const OVERRIDE_KEYS: &'static [&'static str] = &[
        "glow-radius",
        "profile-tilt",
        "card-tilt-divisor",
        "card-tilt-max",
        "marquee-duration",
        "marquee-hover-multiplier",
        "drifter-count",
        "drifter-seed",
    ];

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("glow.falloff_radius_px", self.glow.falloff_radius_px)?;
        tilt_bound("profile_tilt.max_deg", self.profile_tilt.max_deg)?;
        positive("card_tilt.divisor_px", self.card_tilt.divisor_px)?;
        tilt_bound("card_tilt.max_deg", self.card_tilt.max_deg)?;
        self.marquee.validate()?;
        self.scroll_hint.validate()?;
        self.gradient_sweep.validate()?;
        self.reveal.validate()?;
        drifter_bound(self.drifter_count)?;
        Ok(())
    }

    /// Apply one `key=value` override. On error the config is unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "glow-radius" => {
                next.glow.falloff_radius_px =
                    positive("glow.falloff_radius_px", parse_f32(key, value)?)?;
            }
            "profile-tilt" => {
                let deg = tilt_bound("profile_tilt.max_deg", parse_f32(key, value)?)?;
                next.profile_tilt.sensitivity_deg = deg;
                next.profile_tilt.max_deg = deg;
            }
            "card-tilt-divisor" => {
                next.card_tilt.divisor_px =
                    positive("card_tilt.divisor_px", parse_f32(key, value)?)?;
            }
            "card-tilt-max" => {
                next.card_tilt.max_deg = tilt_bound("card_tilt.max_deg", parse_f32(key, value)?)?;
            }
            "marquee-duration" => {
                next.marquee.base_duration_secs =
                    positive("marquee.base_duration_secs", parse_f32(key, value)?)?;
            }
            "marquee-hover-multiplier" => {
                next.marquee.hover_multiplier =
                    positive("marquee.hover_multiplier", parse_f32(key, value)?)?;
            }
            "drifter-count" => {
                let count = value.trim().parse().map_err(|_| unparsable(key, value))?;
                next.drifter_count = drifter_bound(count)?;
            }
            "drifter-seed" => {
                next.drifter_seed = value.trim().parse().map_err(|_| unparsable(key, value))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Apply a batch of overrides, skipping (and returning) the rejected ones.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }
}

fn parse_f32(key: &str, value: &str) -> Result<f32, ConfigError> {
    value.trim().parse::<f32>().map_err(|_| unparsable(key, value))
}

fn unparsable(key: &str, value: &str) -> ConfigError {
    ConfigError::Unparsable {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn drifter_bound(count: usize) -> Result<usize, ConfigError> {
    if count <= MAX_DRIFTERS {
        Ok(count)
    } else {
        Err(ConfigError::OutOfRange {
            field: "drifter_count",
            value: count as f32,
            min: 0.0,
            max: MAX_DRIFTERS as f32,
        })
    }
}

fn tilt_bound(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 && value <= MAX_TILT_DEG {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: MAX_TILT_DEG,
        })
    }
}
