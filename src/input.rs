use glint_core::WidgetGeometry;
use web_sys as web;

/// Roles an element can take via its `data-glint` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roles {
    pub glow: bool,
    pub tilt_card: bool,
    pub tilt_viewport: bool,
    pub marquee: bool,
    pub scroll_hint: bool,
    pub gradient: bool,
    pub drifter: bool,
    pub spotlight: bool,
    pub halo: bool,
    pub parallax: bool,
    pub reveal: bool,
}

impl Roles {
    pub fn parse(attr: &str) -> Self {
        let mut roles = Self::default();
        for token in attr.split_ascii_whitespace() {
            match token {
                "glow" => roles.glow = true,
                "tilt-card" => roles.tilt_card = true,
                "tilt-viewport" => roles.tilt_viewport = true,
                "marquee" => roles.marquee = true,
                "scroll-hint" => roles.scroll_hint = true,
                "gradient" => roles.gradient = true,
                "drifter" => roles.drifter = true,
                "spotlight" => roles.spotlight = true,
                "halo" => roles.halo = true,
                "parallax" => roles.parallax = true,
                "reveal" => roles.reveal = true,
                other => log::warn!("[dom] unknown glint role `{other}`"),
            }
        }
        roles
    }

    /// Needs per-element hover tracking.
    pub fn wants_hover(&self) -> bool {
        self.tilt_card || self.marquee
    }

    /// Registered with the engine as a widget.
    pub fn is_widget(&self) -> bool {
        self.glow || self.tilt_card || self.tilt_viewport || self.marquee || self.reveal
    }
}

#[inline]
pub fn geometry_from_rect(rect: &web::DomRect) -> WidgetGeometry {
    WidgetGeometry::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Scrollable distance for progress tracking; zero when the page fits.
#[inline]
pub fn scroll_range(document_height: f64, viewport_height: f64) -> f32 {
    (document_height - viewport_height).max(0.0) as f32
}

/// Convert a `data-glint-*` dataset key (`glintGlowRadius`) into an override
/// key (`glow-radius`). `None` for keys outside the prefix.
pub fn override_key(dataset_key: &str, prefix: &str) -> Option<String> {
    let rest = dataset_key.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    let mut key = String::with_capacity(rest.len() + 4);
    for (i, c) in rest.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                key.push('-');
            }
            key.push(c.to_ascii_lowercase());
        } else {
            key.push(c);
        }
    }
    Some(key)
}
