use glam::Vec2;

/// Identifier of an anchor as assigned by the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u32);

/// An on-screen rectangle (typically a project card) supplied by the UI layer.
/// The engine treats anchors as read-only snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    /// Center of the rectangle in surface coordinates (CSS pixels).
    pub position: Vec2,
    pub half_extents: Vec2,
    /// Set by the UI when the element itself reports hover.
    pub active: bool,
    pub category: String,
}

impl Anchor {
    pub fn new(id: u32, position: Vec2, half_extents: Vec2, category: impl Into<String>) -> Self {
        Self {
            id: AnchorId(id),
            position,
            half_extents,
            active: false,
            category: category.into(),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Hover zone radius: the larger half extent plus a fixed margin.
    pub fn hover_radius(&self, margin: f32) -> f32 {
        self.half_extents.x.max(self.half_extents.y) + margin
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.half_extents.is_finite()
    }
}

/// Latest pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Vec2,
    /// True while the pointer is over the surface.
    pub active: bool,
}

/// Drawing surface dimensions in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self {
            width: sane(width),
            height: sane(height),
            pixel_ratio: ratio,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing-store size in device pixels.
    pub fn device_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// Clamp a point into the viewport. Non-finite coordinates collapse to 0.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let fix = |v: f32, max: f32| if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
        Vec2::new(fix(p.x, self.width), fix(p.y, self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

/// Discrete UI trigger. Triggers are queued and applied at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Pointer moved to surface coordinates.
    PointerMove(Vec2),
    /// Pointer entered the surface.
    PointerEnter,
    /// Pointer left the surface.
    PointerLeave,
    /// Click at surface coordinates.
    Click(Vec2),
    /// The UI reports a hover-enter on one anchor element.
    HoverEnter(AnchorId),
    /// The category filter changed; anchors are about to move.
    FilterChanged,
}
