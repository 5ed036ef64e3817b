// Tuning constants for the effects engine. Every value here is the default
// for a field in `EffectsConfig`; front-ends may override them at startup.

// Viewport
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 1920.0; // used until the first real measurement
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 1080.0;

// Proximity glow
pub const GLOW_FALLOFF_RADIUS_PX: f32 = 200.0; // intensity reaches zero at this distance
pub const GLOW_SHADOW_BLUR_BASE_PX: f32 = 20.0;
pub const GLOW_SHADOW_BLUR_SPAN_PX: f32 = 30.0;
pub const GLOW_SHADOW_ALPHA_BASE: f32 = 0.1;
pub const GLOW_SHADOW_ALPHA_SPAN: f32 = 0.2;
pub const GLOW_INSET_BLUR_SPAN_PX: f32 = 20.0;
pub const GLOW_BORDER_ALPHA_BASE: f32 = 0.1;
pub const GLOW_BORDER_ALPHA_SPAN: f32 = 0.1;
pub const GLOW_HIGHLIGHT_OPACITY_SPAN: f32 = 0.6;
pub const GLOW_HIGHLIGHT_DIAMETER_PX: f32 = 128.0;

// Page spotlight and profile halo
pub const SPOTLIGHT_DIAMETER_PX: f32 = 600.0;
pub const HALO_SHIFT_SPAN_PX: f32 = 16.0; // full-width pointer travel moves the halo this far

// Tilt
pub const PROFILE_TILT_SENSITIVITY_DEG: f32 = 8.0; // degrees at the viewport edge
pub const CARD_TILT_DIVISOR_PX: f32 = 8.0; // px of pointer offset per degree
pub const CARD_TILT_MAX_DEG: f32 = 14.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Scroll parallax for the background word
pub const PARALLAX_PROGRESS_END: f32 = 0.5;
pub const PARALLAX_OFFSET_END_PX: f32 = 80.0;

// Looping motion
pub const MARQUEE_BASE_SECS: f32 = 20.0;
pub const MARQUEE_HOVER_MULTIPLIER: f32 = 0.5; // < 1 speeds the marquee up on hover
pub const SCROLL_HINT_SECS: f32 = 1.5;
pub const SCROLL_HINT_TRAVEL_PX: f32 = 10.0;
pub const GRADIENT_SWEEP_SECS: f32 = 8.0;
pub const DRIFTER_MIN_SECS: f32 = 6.0;
pub const DRIFTER_MAX_SECS: f32 = 10.0;
pub const MAX_FRAME_STEP_SECS: f32 = 0.25; // cap per tick so a background tab does not jump
pub const MAX_DRIFTERS: usize = 16;

// Scroll-into-view reveal of the project cards
pub const REVEAL_MARGIN_PX: f32 = 50.0; // viewport shrunk by this much on every side
pub const REVEAL_TRAVEL_PX: f32 = 50.0; // cards rise from this far below their slot
pub const REVEAL_STAGGER_SECS: f32 = 0.2; // extra delay per card index
pub const REVEAL_DURATION_SECS: f32 = 0.5;
