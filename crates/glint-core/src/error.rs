use thiserror::Error;

/// Errors raised while building or overriding an [`EffectsConfig`](crate::EffectsConfig).
///
/// The engine itself never fails at runtime; only configuration can be
/// rejected, and front-ends log and skip a rejected override.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must lie in {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("unknown config key `{0}`")]
    UnknownKey(String),

    #[error("value `{value}` for `{key}` is not a number")]
    Unparsable { key: String, value: String },
}
