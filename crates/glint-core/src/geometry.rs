use glam::Vec2;

/// Identifier a front-end assigns to each effected element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

/// Snapshot of a widget's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetGeometry {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Layout has not produced a box yet (detached, `display:none`, first frame).
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.left.is_finite() && self.top.is_finite()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// `point` relative to the top-left corner.
    #[inline]
    pub fn relative(&self, point: Vec2) -> Vec2 {
        point - self.top_left()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.y >= self.top
            && point.x < self.left + self.width
            && point.y < self.top + self.height
    }
}

/// Lazily measures widget boxes. Called during every recomputation; an
/// implementation must not cache across frames because layout can shift.
pub trait MeasureGeometry {
    fn measure(&self, id: WidgetId) -> Option<WidgetGeometry>;
}

impl<F> MeasureGeometry for F
where
    F: Fn(WidgetId) -> Option<WidgetGeometry>,
{
    fn measure(&self, id: WidgetId) -> Option<WidgetGeometry> {
        self(id)
    }
}
