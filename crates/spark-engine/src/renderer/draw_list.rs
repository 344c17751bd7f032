use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Primitive kinds understood by the platform replayer.
/// Stored as `f32` in [`DrawCommand::kind`] so the whole list stays a flat float buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DrawKind {
    /// Clear the whole surface. Geometry fields are unused.
    Clear = 0,
    /// Stroke a round-capped segment from (x0, y0) to (x1, y1).
    Line = 1,
    /// Stroke a circle centered at (x0, y0) with radius `x1`.
    StrokeCircle = 2,
    /// Fill a circle centered at (x0, y0) with radius `x1`.
    FillCircle = 3,
    /// Fill an axis-aligned square centered at (x0, y0) with side `x1`.
    FillRect = 4,
    /// Status overlay text; `aux` carries the intensity percentage.
    Overlay = 5,
}

impl DrawKind {
    pub fn from_f32(value: f32) -> Option<Self> {
        match value as u8 {
            0 => Some(Self::Clear),
            1 => Some(Self::Line),
            2 => Some(Self::StrokeCircle),
            3 => Some(Self::FillCircle),
            4 => Some(Self::FillRect),
            5 => Some(Self::Overlay),
            _ => None,
        }
    }
}

/// One draw primitive. Must stay 8 floats = 32 bytes stride so JS can read the list directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// [`DrawKind`] discriminant.
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Stroke width in CSS pixels.
    pub width: f32,
    /// Final global alpha, intensity already applied.
    pub alpha: f32,
    /// Kind-specific payload.
    pub aux: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 8;

    pub fn kind(&self) -> Option<DrawKind> {
        DrawKind::from_f32(self.kind)
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }
}

/// Per-frame list of draw commands, rebuilt from scratch every rendered frame.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Alpha is clamped into [0, 1]; fully transparent primitives are dropped.
    fn push(&mut self, kind: DrawKind, a: Vec2, b: Vec2, width: f32, alpha: f32, aux: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 && kind != DrawKind::Clear {
            return;
        }
        self.commands.push(DrawCommand {
            kind: kind as u8 as f32,
            x0: a.x,
            y0: a.y,
            x1: b.x,
            y1: b.y,
            width,
            alpha,
            aux,
        });
    }

    pub fn clear_surface(&mut self, size: Vec2) {
        self.push(DrawKind::Clear, Vec2::ZERO, size, 0.0, 1.0, 0.0);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, alpha: f32) {
        self.push(DrawKind::Line, from, to, width, alpha, 0.0);
    }

    /// Stroke every consecutive pair of `points`.
    pub fn polyline(&mut self, points: &[Vec2], width: f32, alpha: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], width, alpha);
        }
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, alpha: f32) {
        self.push(DrawKind::StrokeCircle, center, Vec2::new(radius, 0.0), width, alpha, 0.0);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.push(DrawKind::FillCircle, center, Vec2::new(radius, 0.0), 0.0, alpha, 0.0);
    }

    pub fn fill_square(&mut self, center: Vec2, side: f32, alpha: f32) {
        self.push(DrawKind::FillRect, center, Vec2::new(side, 0.0), 0.0, alpha, 0.0);
    }

    /// Status overlay anchored at the bottom-left of the surface.
    pub fn overlay(&mut self, position: Vec2, alpha: f32, intensity_percent: f32) {
        self.push(DrawKind::Overlay, position, Vec2::ZERO, 0.0, alpha, intensity_percent);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands of one kind (handy for tests and debug stats).
    pub fn count(&self, kind: DrawKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == Some(kind)).count()
    }

    /// The list as a flat float slice, 8 floats per command.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    /// Raw pointer to command data for zero-copy reads from JS memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_command_is_8_floats() {
        assert_eq!(std::mem::size_of::<DrawCommand>(), 32);
        assert_eq!(DrawCommand::FLOATS, 8);
    }

    #[test]
    fn polyline_emits_one_line_per_segment() {
        let mut list = DrawList::new();
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)];
        list.polyline(&pts, 2.0, 0.5);
        assert_eq!(list.count(DrawKind::Line), 2);
    }

    #[test]
    fn transparent_primitives_are_dropped() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ZERO, 3.0, 0.0);
        list.line(Vec2::ZERO, Vec2::ONE, 1.0, -0.3);
        assert!(list.is_empty());
    }

    #[test]
    fn alpha_is_clamped() {
        let mut list = DrawList::new();
        list.stroke_circle(Vec2::ZERO, 5.0, 1.0, 2.5);
        assert_eq!(list.commands()[0].alpha, 1.0);
    }

    #[test]
    fn float_view_matches_command_count() {
        let mut list = DrawList::new();
        list.clear_surface(Vec2::new(800.0, 600.0));
        list.fill_square(Vec2::new(4.0, 4.0), 8.0, 0.8);
        assert_eq!(list.as_floats().len(), 2 * DrawCommand::FLOATS);
        assert_eq!(list.commands()[1].kind(), Some(DrawKind::FillRect));
    }
}
