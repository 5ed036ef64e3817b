/// DOM contract between the page markup and the effects front-end.
///
/// Effected elements carry a space-separated `data-glint` list of roles; the
/// contact overlay is addressed by id.
pub const ROLE_ATTR: &str = "data-glint";
pub const HIGHLIGHT_ATTR: &str = "data-glint-highlight"; // child disc inside a glow card
pub const OPEN_CONTACT_ATTR: &str = "data-glint-open"; // any element that opens the overlay
pub const CONFIG_ATTR_PREFIX: &str = "glint"; // `data-glint-glow-radius` -> dataset key `glintGlowRadius`

// Contact overlay
pub const OVERLAY_ID: &str = "contact-overlay";
pub const OVERLAY_CONTENT_ID: &str = "contact-content";
pub const OVERLAY_CLOSE_ID: &str = "contact-close";
pub const HIDDEN_CLASS: &str = "hidden";

// Glow colour (violet) shared by shadow and border
pub const GLOW_RGB: &str = "139, 92, 246";
pub const BORDER_RGB: &str = "255, 255, 255";

// Marquee track holds its items twice; one cycle moves it by half its width
pub const MARQUEE_TRAVEL_PERCENT: f32 = 50.0;

// Drifting shapes travel this far at the peak of their cycle
pub const DRIFTER_TRAVEL_PX: f32 = 24.0;
